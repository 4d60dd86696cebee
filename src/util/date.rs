use chrono::NaiveDate;

/// True if `text` is a real calendar date written as `YYYY-MM-DD`.
///
/// Field widths are strict (`2024-2-5` is rejected) and the date must exist
/// (`2024-02-30` is rejected). Past dates are fine.
pub fn is_valid_date(text: &str) -> bool {
    if !has_date_shape(text) {
        return false;
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
}

/// Checks the 4-2-2 digit layout before handing off to chrono, whose numeric
/// fields also accept unpadded and signed values. Years count from 1, so
/// `0000` is rejected.
fn has_date_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
        && &bytes[..4] != b"0000"
}
