//! Page revisions and the copy each one ships with.
//!
//! `Launch` is the first page that went out, `Showcase` the redesign with the
//! animated hero and stats strip, `Multilang` the current page with language
//! tabs and a bookable demo.

use crate::components::icons::{ICON_KEY, ICON_LOCK, ICON_SMARTPHONE, ICON_ZAP};
use crate::samples::SampleLang;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Edition {
    Launch,
    Showcase,
    #[default]
    Multilang,
}

pub struct HeroCopy {
    pub badge: Option<&'static str>,
    pub title: [&'static str; 2],
    pub tagline: &'static str,
    pub primary: &'static str,
    /// "Schedule Demo" style button, if the revision has one.
    pub secondary: Option<&'static str>,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Benefit {
    pub icon: &'static [&'static str],
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Closing call to action. `heading` is `None` for the bare-button variant.
pub struct ClosingCopy {
    pub heading: Option<&'static str>,
    pub body: Option<&'static str>,
    pub button: &'static str,
}

static LAUNCH_HERO: HeroCopy = HeroCopy {
    badge: None,
    title: ["Effortless Razorpay Integration", "for Your Business"],
    tagline: "Seamlessly integrate secure payment systems with our API and Website solutions, \
              customized for your needs.",
    primary: "Get Started Now",
    secondary: None,
};

static SHOWCASE_HERO: HeroCopy = HeroCopy {
    badge: Some("Trusted by 10,000+ businesses worldwide"),
    title: ["Effortless Razorpay", "Integration"],
    tagline: "Transform your business with our powerful payment integration solution. \
              Set up in minutes, not days.",
    primary: "Start Free Trial",
    secondary: Some("Schedule Demo"),
};

const STATS: &[Stat] = &[
    Stat { value: "99.9%", label: "Uptime" },
    Stat { value: "0.3s", label: "Avg Response Time" },
    Stat { value: "₹100M+", label: "Processed Daily" },
    Stat { value: "10k+", label: "Happy Customers" },
];

const LAUNCH_BENEFITS: &[Benefit] = &[
    Benefit {
        icon: ICON_KEY,
        title: "Quick API Setup",
        description: "Just provide your Razorpay credentials, and you're ready to accept payments.",
    },
    Benefit {
        icon: ICON_ZAP,
        title: "Fast Payment Verification",
        description: "Simplified tools to ensure seamless order and payment authentication.",
    },
    Benefit {
        icon: ICON_SMARTPHONE,
        title: "User-Friendly Interface",
        description: "Create and manage orders effortlessly through our intuitive web portal.",
    },
    Benefit {
        icon: ICON_LOCK,
        title: "Secure Transactions",
        description: "Built-in Razorpay utilities to ensure end-to-end encryption and secure payments.",
    },
];

const SHOWCASE_BENEFITS: &[Benefit] = &[
    Benefit {
        icon: ICON_KEY,
        title: "Quick API Setup",
        description: "Integration in less than 5 minutes with our streamlined onboarding process.",
    },
    Benefit {
        icon: ICON_ZAP,
        title: "Lightning Fast",
        description: "Process thousands of transactions per second with 99.9% uptime guarantee.",
    },
    Benefit {
        icon: ICON_SMARTPHONE,
        title: "Mobile-First Design",
        description: "Perfect checkout experience across all devices and platforms.",
    },
    Benefit {
        icon: ICON_LOCK,
        title: "Bank-Grade Security",
        description: "PCI DSS Level 1 compliant with end-to-end encryption.",
    },
];

const STEPS: &[Step] = &[
    Step {
        number: "1",
        title: "Generate Credentials",
        description: "Add your Razorpay API key and secret.",
    },
    Step {
        number: "2",
        title: "Create Orders",
        description: "Use our API or website dashboard to create payment orders.",
    },
    Step {
        number: "3",
        title: "Verify Payments",
        description: "Validate transactions quickly with our secure verification tools.",
    },
];

static LAUNCH_CLOSING: ClosingCopy = ClosingCopy {
    heading: None,
    body: None,
    button: "Start Integrating Razorpay Today 🚀",
};

static SHOWCASE_CLOSING: ClosingCopy = ClosingCopy {
    heading: Some("Ready to Transform Your Business?"),
    body: Some(
        "Join thousands of businesses that trust our payment solution. \
         Set up your account in minutes and start accepting payments today.",
    ),
    button: "Get Started For Free",
};

impl Edition {
    pub const ALL: [Edition; 3] = [Edition::Launch, Edition::Showcase, Edition::Multilang];

    /// Route the revision is served under.
    pub fn path(self) -> &'static str {
        match self {
            Edition::Launch => "/v1",
            Edition::Showcase => "/v2",
            Edition::Multilang => "/",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Edition::Launch => "Launch",
            Edition::Showcase => "Showcase",
            Edition::Multilang => "Current",
        }
    }

    pub fn has_backdrop(self) -> bool {
        !matches!(self, Edition::Launch)
    }

    pub fn animates_entry(self) -> bool {
        !matches!(self, Edition::Launch)
    }

    pub fn has_tabs(self) -> bool {
        matches!(self, Edition::Multilang)
    }

    /// Whether "Schedule Demo" opens the booking link.
    pub fn schedules_demo(self) -> bool {
        matches!(self, Edition::Multilang)
    }

    /// Whether the copy button swaps to a check mark while "Copied!".
    pub fn swaps_copy_icon(self) -> bool {
        !matches!(self, Edition::Launch)
    }

    /// Sample actually shown and copied. Revisions without tabs always use curl.
    pub fn sample_for(self, selected: SampleLang) -> SampleLang {
        if self.has_tabs() {
            selected
        } else {
            SampleLang::Curl
        }
    }

    pub fn hero(self) -> &'static HeroCopy {
        match self {
            Edition::Launch => &LAUNCH_HERO,
            Edition::Showcase | Edition::Multilang => &SHOWCASE_HERO,
        }
    }

    pub fn stats(self) -> &'static [Stat] {
        match self {
            Edition::Launch => &[],
            Edition::Showcase | Edition::Multilang => STATS,
        }
    }

    pub fn benefits(self) -> &'static [Benefit] {
        match self {
            Edition::Launch => LAUNCH_BENEFITS,
            Edition::Showcase | Edition::Multilang => SHOWCASE_BENEFITS,
        }
    }

    pub fn steps(self) -> &'static [Step] {
        match self {
            Edition::Showcase => &[],
            Edition::Launch | Edition::Multilang => STEPS,
        }
    }

    pub fn closing(self) -> &'static ClosingCopy {
        match self {
            Edition::Launch => &LAUNCH_CLOSING,
            Edition::Showcase | Edition::Multilang => &SHOWCASE_CLOSING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn current_revision_is_the_default_route() {
        assert_eq!(Edition::default(), Edition::Multilang);
        assert_eq!(Edition::Multilang.path(), "/");
    }

    #[test]
    fn paths_are_unique() {
        let paths: Vec<&str> = Edition::ALL.iter().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["/v1", "/v2", "/"]);
    }

    #[test]
    fn only_current_revision_has_tabs_and_demo() {
        for edition in Edition::ALL {
            let current = edition == Edition::Multilang;
            assert_eq!(edition.has_tabs(), current);
            assert_eq!(edition.schedules_demo(), current);
        }
    }

    #[test]
    fn earlier_revisions_pin_curl() {
        for lang in SampleLang::ALL {
            assert_eq!(Edition::Launch.sample_for(lang), SampleLang::Curl);
            assert_eq!(Edition::Showcase.sample_for(lang), SampleLang::Curl);
            assert_eq!(Edition::Multilang.sample_for(lang), lang);
        }
    }

    #[test]
    fn every_revision_has_four_benefits() {
        for edition in Edition::ALL {
            assert_eq!(edition.benefits().len(), 4);
        }
    }

    #[test]
    fn section_mix_per_revision() {
        assert!(Edition::Launch.stats().is_empty());
        assert_eq!(Edition::Launch.steps().len(), 3);
        assert_eq!(Edition::Showcase.stats().len(), 4);
        assert!(Edition::Showcase.steps().is_empty());
        assert_eq!(Edition::Multilang.stats().len(), 4);
        assert_eq!(Edition::Multilang.steps().len(), 3);
    }

    #[test]
    fn demo_button_only_where_revision_had_one() {
        assert_eq!(Edition::Launch.hero().secondary, None);
        assert_eq!(Edition::Multilang.hero().secondary, Some("Schedule Demo"));
    }
}
