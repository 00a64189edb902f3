//! Parser for delimited symptom-disease dataset files.
//!
//! The expected layout is a header row naming a `Disease` column, one or
//! more `Symptom_N` columns, and optional `Description` / `Treatment`
//! columns:
//!
//! ```text
//! Disease,Symptom_1,Symptom_2,Symptom_3,Description,Treatment
//! Influenza,fever,body aches,fatigue,"Respiratory illness","Rest, fluids"
//! ```
//!
//! Fields may be double-quoted (descriptions routinely contain the
//! delimiter). The symptom slot count is discovered from the header, not
//! fixed at three.

pub mod table;
