//! Static operator-input corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of text the way it arrives from
//! the admin form: pasted from spreadsheets, supplier PDFs, chat messages.

/// Bullet and dash lists pasted one feature per line.
pub const CORPUS_BULLETS: &[&str] = &[
    "• Frost free\n• A+ energy rating\n• Reversible doors",
    "- 380 litre capacity\n- Silver finish\n\n- Multi-airflow",
    "* Quiet operation\r\n* LED lighting\r\n",
    "•\n• Only one real line\n-",
    "Plain line one\nPlain line two, with comma",
];

/// Comma-separated lists typed on a single line.
pub const CORPUS_COMMAS: &[&str] = &[
    "Red, Blue, Green",
    "Stainless steel,Timer,  Child lock ,",
    "A,,B",
];

/// JSON-shaped feature input, valid and not.
pub const CORPUS_FEATURE_JSON: &[&str] = &[
    r#"["Frost free","Inverter motor"]"#,
    r#"  [" padded " , "entries"]  "#,
    r#"["unterminated", "array""#,
    "[not json at all]",
    "[1, 2, 3]",
];

/// Specification text in `key: value` form.
pub const CORPUS_SPEC_LINES: &[&str] = &[
    "Capacity: 380 Liters\nColor: Silver",
    "Voltage: 220-240V\nFrequency: 50Hz\nWarranty: 2 years",
    "Time: 10:30am",
    "  Brand :  Hisense  \n\nModel:RD-45\n",
];

/// Specification text that holds no pairs at all.
pub const CORPUS_PROSE: &[&str] = &[
    "just some prose with no colons",
    "Ask the supplier for the full datasheet",
    "{not valid json}",
];
