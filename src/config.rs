// External collaborators. The site issues no requests of its own; these are
// outbound links opened in a new browsing context.

pub const WHATSAPP_URL: &str = "https://wa.link/m1flig";

pub const LINKEDIN_URL: &str =
    "https://www.linkedin.com/in/anderson-silva-valornobre?utm_source=share_via&utm_content=profile&utm_medium=member_android";
