/// Screen descriptors: the text, colors and mockup of each marketing screenshot

use std::fmt;

use image::Rgb;
use serde::Serialize;

pub type Color = Rgb<u8>;

/// Which schematic app screen is drawn inside the device frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MockupKind {
    Feed,
    Topics,
    Bookmarks,
    Notifications,
    Summary,
}

impl MockupKind {
    pub const ALL: [MockupKind; 5] = [
        MockupKind::Feed,
        MockupKind::Topics,
        MockupKind::Bookmarks,
        MockupKind::Notifications,
        MockupKind::Summary,
    ];

    /// Tag used in output filenames.
    pub fn tag(self) -> &'static str {
        match self {
            MockupKind::Feed => "feed",
            MockupKind::Topics => "topics",
            MockupKind::Bookmarks => "bookmarks",
            MockupKind::Notifications => "notifications",
            MockupKind::Summary => "summary",
        }
    }
}

impl fmt::Display for MockupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDescriptor {
    /// Headline; `\n` separates lines
    pub caption: &'static str,
    pub subtitle: &'static str,
    pub top: Color,
    pub bottom: Color,
    pub mockup: MockupKind,
}

impl ScreenDescriptor {
    pub fn caption_lines(&self) -> impl Iterator<Item = &'static str> {
        self.caption.split('\n')
    }
}

pub const SCREENS: [ScreenDescriptor; 5] = [
    ScreenDescriptor {
        caption: "AI-Powered\nNews Digest",
        subtitle: "Stay informed with curated stories",
        top: Rgb([15, 23, 42]),
        bottom: Rgb([30, 58, 138]),
        mockup: MockupKind::Feed,
    },
    ScreenDescriptor {
        caption: "Personalized\nFor You",
        subtitle: "Topics tailored to your interests",
        top: Rgb([88, 28, 135]),
        bottom: Rgb([187, 55, 142]),
        mockup: MockupKind::Topics,
    },
    ScreenDescriptor {
        caption: "Save Articles\nFor Later",
        subtitle: "Bookmark what matters most",
        top: Rgb([7, 89, 133]),
        bottom: Rgb([20, 170, 170]),
        mockup: MockupKind::Bookmarks,
    },
    ScreenDescriptor {
        caption: "Daily Digest\nNotifications",
        subtitle: "Never miss a story",
        top: Rgb([180, 83, 9]),
        bottom: Rgb([234, 138, 30]),
        mockup: MockupKind::Notifications,
    },
    ScreenDescriptor {
        caption: "Smart\nSummaries",
        subtitle: "Get the key points in seconds",
        top: Rgb([21, 94, 59]),
        bottom: Rgb([52, 168, 83]),
        mockup: MockupKind::Summary,
    },
];
