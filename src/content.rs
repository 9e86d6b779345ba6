//! Static copy and asset references rendered by the landing page.

use std::fmt;

use crate::components::icon::Icon;

/// Navigable sections of the landing page. Each one is rendered as exactly
/// one element whose `id` equals [`SectionId::anchor`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Features,
    HowItWorks,
    Gallery,
}

impl SectionId {
    pub const ALL: [SectionId; 3] = [SectionId::Features, SectionId::HowItWorks, SectionId::Gallery];

    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Features => "features",
            SectionId::HowItWorks => "how-it-works",
            SectionId::Gallery => "gallery",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    /// Accepts both `"gallery"` and `"#gallery"`.
    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        SectionId::ALL.into_iter().find(|section| section.anchor() == anchor)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavEntry {
    pub label: &'static str,
    pub section: SectionId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub icon: Icon,
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Loading {
    Eager,
    Lazy,
}

impl Loading {
    pub fn as_attr(self) -> &'static str {
        match self {
            Loading::Eager => "eager",
            Loading::Lazy => "lazy",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageAsset {
    pub url: &'static str,
    pub alt: &'static str,
    pub loading: Loading,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryItem {
    pub image: ImageAsset,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SocialLink {
    pub icon: Icon,
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const BRAND: &str = "Furnexa";

pub const NAV_LINKS: [NavEntry; 3] = [
    NavEntry { label: "Features", section: SectionId::Features },
    NavEntry { label: "How It Works", section: SectionId::HowItWorks },
    NavEntry { label: "Gallery", section: SectionId::Gallery },
];

pub const HERO_IMAGE: ImageAsset = ImageAsset {
    url: "/assets/hero-living-room.jpg",
    alt: "Modern luxury living room with warm earth tones",
    loading: Loading::Eager,
};

pub const HERO_STATS: [HeroStat; 3] = [
    HeroStat { value: "10+", label: "Designs Created" },
    HeroStat { value: "98%", label: "Client Satisfaction" },
    HeroStat { value: "3D", label: "Visualization" },
];

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::Palette,
        title: "Room Customization",
        description: "Enter room specifications including size, shape, and colour scheme to create an accurate virtual representation.",
    },
    Feature {
        icon: Icon::Box,
        title: "3D Visualization",
        description: "Convert your 2D layouts into stunning 3D views for an immersive, realistic room presentation.",
    },
    Feature {
        icon: Icon::Maximize,
        title: "Perfect Scaling",
        description: "Automatically scale furniture items to fit room dimensions, ensuring spatial accuracy every time.",
    },
    Feature {
        icon: Icon::Paintbrush,
        title: "Furniture Customization",
        description: "Apply shading and change colours for individual pieces or the entire design to match any aesthetic.",
    },
    Feature {
        icon: Icon::Save,
        title: "Save & Edit Designs",
        description: "Save completed designs for future reference. Edit or delete existing designs with ease.",
    },
    Feature {
        icon: Icon::UserCircle,
        title: "Designer Accounts",
        description: "Secure login for designers to manage their portfolio and access saved designs anytime.",
    },
];

pub const PROCESS_STEPS: [ProcessStep; 4] = [
    ProcessStep {
        icon: Icon::ClipboardList,
        number: "01",
        title: "Enter Room Details",
        description: "Input room dimensions, shape, and preferred colour scheme to set the foundation for your design.",
    },
    ProcessStep {
        icon: Icon::PenTool,
        number: "02",
        title: "Create 2D Design",
        description: "Arrange furniture shapes on the 2D canvas, experimenting with different layouts and configurations.",
    },
    ProcessStep {
        icon: Icon::Eye,
        number: "03",
        title: "View in 3D",
        description: "Convert your layout into an immersive 3D visualization to see how it looks in the real world.",
    },
    ProcessStep {
        icon: Icon::Sparkles,
        number: "04",
        title: "Customize & Refine",
        description: "Apply shading, adjust colours, scale furniture, and fine-tune every detail to perfection.",
    },
];

pub const GALLERY_ITEMS: [GalleryItem; 3] = [
    GalleryItem {
        image: ImageAsset {
            url: "/assets/gallery-living-room.jpg",
            alt: "Modern Living Room",
            loading: Loading::Lazy,
        },
        title: "Modern Living Room",
        description: "A serene space featuring clean lines, natural materials, and soft neutral tones.",
        tags: &["Contemporary", "Minimalist", "Warm"],
    },
    GalleryItem {
        image: ImageAsset {
            url: "/assets/gallery-dining.jpg",
            alt: "Dining Area",
            loading: Loading::Lazy,
        },
        title: "Dining Area",
        description: "Elegant dining setup with sculptural lighting and rich terracotta accents.",
        tags: &["Elegant", "Warm Tones", "Modern"],
    },
    GalleryItem {
        image: ImageAsset {
            url: "/assets/gallery-office.jpg",
            alt: "Home Office",
            loading: Loading::Lazy,
        },
        title: "Home Office",
        description: "A productive workspace combining functionality with sophisticated design.",
        tags: &["Functional", "Sophisticated", "Cozy"],
    },
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { icon: Icon::Instagram, label: "Instagram", href: "#" },
    SocialLink { icon: Icon::Twitter, label: "Twitter", href: "#" },
    SocialLink { icon: Icon::Linkedin, label: "LinkedIn", href: "#" },
];

pub const FOOTER_LINKS: [FooterLink; 3] = [
    FooterLink { label: "Privacy", href: "#" },
    FooterLink { label: "Terms", href: "#" },
    FooterLink { label: "Contact", href: "#" },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fixed_list_sizes() {
        assert_eq!(NAV_LINKS.len(), 3);
        assert_eq!(FEATURES.len(), 6);
        assert_eq!(PROCESS_STEPS.len(), 4);
        assert_eq!(GALLERY_ITEMS.len(), 3);
    }

    #[test]
    fn nav_links_cover_every_section_once() {
        let sections: HashSet<SectionId> = NAV_LINKS.iter().map(|l| l.section).collect();
        assert_eq!(sections.len(), SectionId::ALL.len());
        let anchors: HashSet<&str> = SectionId::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), SectionId::ALL.len());
    }

    #[test]
    fn anchors_parse_with_and_without_hash() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
            assert_eq!(SectionId::from_anchor(&section.href()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("#pricing"), None);
        assert_eq!(SectionId::from_anchor(""), None);
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        let numbers: Vec<&str> = PROCESS_STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec!["01", "02", "03", "04"]);
    }

    #[test]
    fn only_the_hero_loads_eagerly() {
        assert_eq!(HERO_IMAGE.loading, Loading::Eager);
        assert!(GALLERY_ITEMS.iter().all(|g| g.image.loading == Loading::Lazy));
    }
}
