//! システムクリップボード（copypasta）

use copypasta::{ClipboardContext, ClipboardProvider};
use nota_fiscal_common::Clipboard;

pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), String> {
        let mut ctx = ClipboardContext::new().map_err(|e| e.to_string())?;
        ctx.set_contents(text.to_owned()).map_err(|e| e.to_string())
    }
}
