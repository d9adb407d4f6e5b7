// ✉️ Thank-you letters

/// Fixed thank-you letter addressed to `name` and signed by `sender`
pub fn render_thank_you(name: &str, sender: &str) -> String {
    format!(
        "Dear {name},\n\n Thank you for your generous donation. \
         Your kindness knows no bounds. Yada yada yada. \
         Please send more money soon \n\n Best, \n {sender} \n"
    )
}
