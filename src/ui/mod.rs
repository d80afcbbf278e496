//! User interface components for the analyzer page.

mod collapsible; // Expandable panel with a title bar
mod drug_form;   // Drug name input and submit button
mod drug_panel;  // Result panel for one molecule
pub mod home;    // The page itself
