use crate::scan::annotate;

/// Bytes emitted per visual line of the array body.
pub const BYTES_PER_LINE: usize = 16;

/// A rendered C array document.
#[derive(Debug, Clone)]
pub struct RenderedArray {
    /// The full output text, tokens joined with single spaces.
    pub text: String,
    /// Number of frame comments emitted.
    pub frame_count: usize,
}

/// Render `data` as a C byte-array literal named `array_name`.
///
/// The document is built as a token stream and joined with single spaces;
/// line breaks are embedded inside tokens, so the visual layout survives the
/// space-joining. Frame comments (every 4 bytes) and line wrapping (every 16
/// bytes) run off the same offset counter but are otherwise independent.
///
/// `array_name` is used verbatim; callers wanting a legal C identifier must
/// supply one.
pub fn render(data: &[u8], array_name: &str) -> RenderedArray {
    let mut annotations = annotate(data).peekable();
    let mut tokens: Vec<String> = Vec::with_capacity(data.len() + data.len() / 2 + 4);
    let mut frame_count = 0;

    tokens.push(format!("const uint8_t {array_name}[] = {{"));

    for (offset, byte) in data.iter().enumerate() {
        if let Some(annotation) = annotations.next_if(|a| a.offset == offset) {
            tokens.push(format!("\n  /* Frame {} */", annotation.index));
            tokens.push(format!(
                "  /* Type:0x{:02X}, Reserved:0x{:02X}, Len:{} */",
                annotation.header.frame_type,
                annotation.header.reserved,
                annotation.header.payload_len
            ));
            frame_count += 1;
        }

        if offset % BYTES_PER_LINE == 0 {
            tokens.push("\n  ".to_string());
        }

        tokens.push(format!("0x{byte:02x},"));
    }

    tokens.push("\n};".to_string());
    tokens.push(format!("const uint32_t {array_name}_len = {};", data.len()));

    RenderedArray {
        text: tokens.join(" "),
        frame_count,
    }
}
