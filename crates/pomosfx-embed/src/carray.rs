//! C array source rendering.

use pomosfx_audio::{read_wav_header, AudioResult};

/// Byte literals emitted per array row.
const BYTES_PER_ROW: usize = 16;

/// Renders a C array declaration plus its paired length constant.
///
/// Bytes appear as upper-case hex literals, [`BYTES_PER_ROW`] per row,
/// comma-and-space separated within a row, with a trailing comma after
/// every row except the one containing the final byte. Empty input is
/// legal and produces an empty array body; the length constant is emitted
/// either way.
pub fn render_array(var_name: &str, data: &[u8]) -> String {
    let mut out = String::new();
    out.push_str(&format!("const uint8_t PROGMEM {var_name}[] = {{\n"));

    let num_rows = data.len().div_ceil(BYTES_PER_ROW);
    for (row_index, row) in data.chunks(BYTES_PER_ROW).enumerate() {
        let literals: Vec<String> = row.iter().map(|b| format!("0x{b:02X}")).collect();
        out.push_str("    ");
        out.push_str(&literals.join(", "));
        if row_index + 1 < num_rows {
            out.push(',');
        }
        out.push('\n');
    }

    out.push_str("};\n");
    out.push_str(&format!(
        "const uint32_t {var_name}_len = sizeof({var_name});\n"
    ));
    out
}

/// Converts a WAV file's bytes to C array source text.
///
/// The header is parsed purely for the descriptive comment block; input
/// that does not parse as a WAV file is rejected.
///
/// # Arguments
/// * `data` - Complete WAV file bytes
/// * `source_name` - Base name of the source file, shown in the comment block
/// * `var_name` - C identifier for the generated array
///
/// # Returns
/// The comment block, a blank line, and the rendered array
pub fn wav_to_c_array(data: &[u8], source_name: &str, var_name: &str) -> AudioResult<String> {
    let header = read_wav_header(data)?;

    let mut out = String::new();
    out.push_str(&format!("// {source_name}\n"));
    out.push_str(&format!(
        "// Format: {} channel(s), {} Hz, {}-bit\n",
        header.channels, header.sample_rate, header.bits_per_sample
    ));
    out.push_str(&format!("// Size: {} bytes\n\n", data.len()));
    out.push_str(&render_array(var_name, data));
    Ok(out)
}
