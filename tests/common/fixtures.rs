//! Static sheet corpora used across harnesses.

/// A realistic export: mixed statuses, a quoted location with a comma, a
/// blank category and assorted phone formats.
pub const SHEET_MIXED: &str = "\
Lead Name,Mobile Number,Area,City,Lead Status,Property Type,Business Category,Website,LinkedIn URL
Acme Realty,+91 98765 43210,Indiranagar,Bangalore,New,Residential Flat,Builders,acme.example,
Sky Homes,98765-43211,\"Baner, Phase 2\",Pune,Contacted,Commercial Space,Agents,https://sky.example,linkedin.com/company/sky
Green Acres,09876543212,Whitefield,Bangalore,Follow up next week,Agricultural Land,Builders,,
Harbor View,9876543213,Andheri,Mumbai,Closed - won,Plot,Investors,,
Quiet Lane,,Koramangala,,,,,,
";

/// Header-only sheet.
pub const SHEET_HEADER_ONLY: &str = "Name,Phone,City\n";

/// The minimal example: Name/Phone/City and nothing else.
pub const SHEET_MINIMAL: &str = "Name,Phone,City\nAcme,98765 43210,Pune\n";

/// Cells that trip naive parsers: embedded quotes, trailing commas, CRLF.
pub const SHEET_AWKWARD: &str = "Name,Phone,Status\r\n\"The \"\"Best\"\" Homes\",123,\r\n\r\nShort Row\r\n";

const CITIES: &[&str] = &["Bangalore", "Pune", "Mumbai", "Chennai", "Hyderabad"];
const STATUSES: &[&str] = &["New", "Contacted", "Follow up", "Closed", ""];
const CATEGORIES: &[&str] = &["Builders", "Agents", "Investors", ""];

/// Synthetic export with `rows` data rows, deterministic for a given size.
pub fn sheet_high_volume(rows: usize) -> String {
    let mut out = String::from("Name,Phone,Location,City,Status,Property Type,Category\n");
    for i in 0..rows {
        out.push_str(&format!(
            "Lead {i},+91 98{:08},Sector {},{},{},{},{}\n",
            i,
            i % 97,
            CITIES[i % CITIES.len()],
            STATUSES[i % STATUSES.len()],
            if i % 3 == 0 { "Commercial" } else { "Residential" },
            CATEGORIES[i % CATEGORIES.len()],
        ));
    }
    out
}
