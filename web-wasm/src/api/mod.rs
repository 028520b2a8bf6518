mod invoice;

pub use invoice::{build_upload_form, health, save_invoice, upload_pdf};
