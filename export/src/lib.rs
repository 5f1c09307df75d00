//! Logisim-format exporter (§4.8): a 256-byte image in, a `v2.0 raw` text
//! dump out. Grounded directly in the original `bin2logisim` tool's output
//! format; see DESIGN.md.

use trisk_util::IMAGE_SIZE;

const HEADER: &str = "v2.0 raw\n";

/// Formats a 256-byte image as Logisim's `v2.0 raw` text format: lowercase
/// hex, no leading zeros, space-separated, trailing space permitted.
pub fn format_logisim(image: &[u8; IMAGE_SIZE]) -> String {
    let mut out = String::with_capacity(HEADER.len() + IMAGE_SIZE * 3);
    out.push_str(HEADER);
    for byte in image {
        out.push_str(&format!("{:x} ", byte));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_literal() {
        let image = [0u8; IMAGE_SIZE];
        let text = format_logisim(&image);
        assert!(text.starts_with("v2.0 raw\n"));
    }

    #[test]
    fn bytes_are_lowercase_hex_no_padding() {
        let mut image = [0u8; IMAGE_SIZE];
        image[0] = 0xF1;
        image[1] = 0x0A;
        image[2] = 0x00;
        let text = format_logisim(&image);
        let body = text.lines().nth(1).unwrap();
        let tokens: Vec<&str> = body.split_whitespace().collect();
        assert_eq!(tokens[0], "f1");
        assert_eq!(tokens[1], "a");
        assert_eq!(tokens[2], "0");
    }

    #[test]
    fn emits_exactly_256_tokens() {
        let image = [0xABu8; IMAGE_SIZE];
        let text = format_logisim(&image);
        let body = text.lines().nth(1).unwrap();
        assert_eq!(body.split_whitespace().count(), IMAGE_SIZE);
    }
}
