pub mod agreement_status;
pub mod agreement_type;
pub mod document_kind;
pub mod filter_category;
pub mod filter_selection;
pub mod region;
