/// Contact channels offered on the help & support page
use serde::Serialize;

/// A way to reach support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub id: &'static str,
    pub title: &'static str,
    pub url: &'static str,
}

/// All contact channels, in display order
pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        id: "customer_support",
        title: "Customer Support",
        url: "https://app.3dnaturesounds.com/support",
    },
    ContactChannel {
        id: "website",
        title: "Website",
        url: "https://app.3dnaturesounds.com/",
    },
    ContactChannel {
        id: "whatsapp",
        title: "WhatsApp",
        url: "https://whatsapp.com/",
    },
    ContactChannel {
        id: "facebook",
        title: "Facebook",
        url: "https://facebook.com/",
    },
    ContactChannel {
        id: "twitter",
        title: "X (Formerly Twitter)",
        url: "https://twitter.com/",
    },
    ContactChannel {
        id: "instagram",
        title: "Instagram",
        url: "https://instagram.com/",
    },
];

/// Look up a channel by id
pub fn contact_channel(id: &str) -> Option<&'static ContactChannel> {
    CONTACT_CHANNELS.iter().find(|c| c.id == id)
}
