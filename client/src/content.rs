//! Static marketing copy for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here is fixed data. Components render it; the reveal scheduler
//! never reads it and only sees the elements the components tag as
//! revealable.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// One anchor in a navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
    pub class: Option<&'static str>,
}

/// Headline metric in the outcomes grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Program {
    pub title: &'static str,
    pub duration: &'static str,
    pub focus: &'static str,
}

/// A step of the "how learning works" process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub title: &'static str,
    pub detail: &'static str,
}

impl Step {
    /// Zero-padded ordinal shown on the card, e.g. `01` for the first step.
    #[must_use]
    pub fn label(position: usize) -> String {
        format!("{:02}", position + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    pub role: &'static str,
}

/// A pricing tier. At most one plan is featured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub term: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub cta: &'static str,
    pub featured: bool,
}

impl Plan {
    #[must_use]
    pub fn card_class(&self) -> &'static str {
        if self.featured { "price-card featured" } else { "price-card" }
    }

    #[must_use]
    pub fn cta_class(&self) -> &'static str {
        if self.featured { "btn btn-primary" } else { "btn btn-secondary" }
    }

    #[must_use]
    pub fn aria_label(&self) -> String {
        format!("{} plan", self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Kicker and headline shown above a section's grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Heading {
    pub kicker: &'static str,
    pub title: &'static str,
}

/// All record arrays the page renders.
#[derive(Clone, Copy, Debug)]
pub struct ContentCatalog {
    pub partners: &'static [&'static str],
    pub outcomes: &'static [Outcome],
    pub programs: &'static [Program],
    pub steps: &'static [Step],
    pub testimonials: &'static [Testimonial],
    pub plans: &'static [Plan],
    pub faqs: &'static [Faq],
}

pub const BRAND: &str = "Learnora";

pub const PRIMARY_NAV: &[NavLink] = &[
    NavLink { href: "#programs", label: "Programs", class: None },
    NavLink { href: "#process", label: "How It Works", class: None },
    NavLink { href: "#testimonials", label: "Stories", class: None },
    NavLink { href: "#pricing", label: "Pricing", class: None },
    NavLink { href: "#pricing", label: "Start free trial", class: Some("btn btn-primary nav-cta") },
];

pub const FOOTER_NAV: &[NavLink] = &[
    NavLink { href: "#programs", label: "Programs", class: None },
    NavLink { href: "#pricing", label: "Pricing", class: None },
    NavLink { href: "#faq", label: "FAQ", class: None },
    NavLink { href: "#top", label: "Start free trial", class: None },
];

pub const HERO_NOTES: &[&str] = &["7-day free trial", "Mentor-reviewed projects", "Certificate on completion"];

pub const OUTCOMES_HEADING: Heading = Heading {
    kicker: "Measured outcomes",
    title: "Learning designed for momentum, not just content consumption.",
};

pub const PROGRAMS_HEADING: Heading = Heading {
    kicker: "Featured programs",
    title: "Choose a pathway aligned to your next professional milestone.",
};

pub const PROCESS_HEADING: Heading = Heading {
    kicker: "How learning works",
    title: "A clear three-step system that keeps you accountable and progressing.",
};

pub const TESTIMONIALS_HEADING: Heading = Heading {
    kicker: "Learner stories",
    title: "Ambitious professionals using Learnora to accelerate their careers.",
};

pub const PRICING_HEADING: Heading = Heading {
    kicker: "Pricing",
    title: "Start free, then choose the support level that matches your goals.",
};

pub const FAQ_HEADING: Heading = Heading {
    kicker: "FAQ",
    title: "Everything you need before starting your free trial.",
};

pub const CATALOG: ContentCatalog = ContentCatalog {
    partners: &[
        "Cambridge Extension",
        "Northbridge Labs",
        "AstraTech",
        "Global Scholar Fund",
        "Open Research Guild",
    ],
    outcomes: &[
        Outcome { value: "94%", label: "Learners report measurable skill growth in 8 weeks" },
        Outcome { value: "2.8x", label: "Higher interview callback rate after capstone completion" },
        Outcome { value: "1,200+", label: "Mentor office-hour sessions hosted each month" },
        Outcome { value: "48 hrs", label: "Average feedback turnaround from expert instructors" },
    ],
    programs: &[
        Program {
            title: "Data Analytics & Decision Science",
            duration: "12 weeks",
            focus: "Excel, SQL, and storytelling with real business datasets",
        },
        Program {
            title: "Product Strategy & UX Leadership",
            duration: "10 weeks",
            focus: "User research, roadmap design, and product communication",
        },
        Program {
            title: "AI for Modern Professionals",
            duration: "8 weeks",
            focus: "Prompt design, AI workflows, and responsible deployment",
        },
        Program {
            title: "Frontend Engineering Studio",
            duration: "14 weeks",
            focus: "Production web architecture, testing, and performance",
        },
        Program {
            title: "Digital Marketing Intelligence",
            duration: "9 weeks",
            focus: "Channel analytics, lifecycle campaigns, and attribution",
        },
        Program {
            title: "Leadership Communication Masterclass",
            duration: "6 weeks",
            focus: "Executive writing, negotiation, and team influence",
        },
    ],
    steps: &[
        Step {
            title: "Choose your path",
            detail: "Start with a guided skill assessment, then get a personalized roadmap based on your goals and schedule.",
        },
        Step {
            title: "Practice with mentors",
            detail: "Join weekly live seminars and submit practical assignments reviewed by instructors from top institutions and industry teams.",
        },
        Step {
            title: "Ship portfolio outcomes",
            detail: "Graduate with a polished capstone, interview-ready talking points, and a certificate employers understand.",
        },
    ],
    testimonials: &[
        Testimonial {
            quote: "Learnora felt like a graduate seminar with real-world urgency. I moved from operations into product analytics in four months.",
            name: "Maya Thompson",
            role: "Product Analyst, Finova",
        },
        Testimonial {
            quote: "The mentor feedback loop is exceptional. Every assignment challenged my thinking and sharpened my communication.",
            name: "Daniel Kim",
            role: "Marketing Lead, Auric Health",
        },
        Testimonial {
            quote: "I finally had structure, accountability, and outcomes. My capstone became the centerpiece of every interview.",
            name: "Sofia Patel",
            role: "UX Researcher, Meridian Studio",
        },
    ],
    plans: &[
        Plan {
            name: "Starter",
            price: "$29",
            term: "/month",
            description: "Build consistency with structured weekly lessons.",
            features: &["Access to 40+ foundational lessons", "Weekly learning tracker", "Community discussion groups"],
            cta: "Start free trial",
            featured: false,
        },
        Plan {
            name: "Pro",
            price: "$79",
            term: "/month",
            description: "Career-focused learning with expert guidance.",
            features: &[
                "Everything in Starter",
                "Live mentor office hours",
                "Project feedback in under 48 hours",
                "Verified completion certificate",
            ],
            cta: "Start free trial",
            featured: true,
        },
        Plan {
            name: "Team",
            price: "$199",
            term: "/month",
            description: "Upskill teams with aligned outcomes and reports.",
            features: &["Up to 10 seats included", "Manager progress dashboard", "Custom learning pathways"],
            cta: "Book a strategy call",
            featured: false,
        },
    ],
    faqs: &[
        Faq {
            question: "How much time should I plan each week?",
            answer: "Most learners succeed with 4-6 focused hours weekly. Lessons are modular, so you can distribute study sessions across your schedule.",
        },
        Faq {
            question: "Are programs beginner-friendly?",
            answer: "Yes. Every path includes orientation modules and optional prep content before advanced assignments begin.",
        },
        Faq {
            question: "Do I get instructor feedback?",
            answer: "Pro and Team plans include detailed project feedback and mentor office hours. Starter learners receive guided peer review.",
        },
        Faq {
            question: "Can I switch programs after starting?",
            answer: "You can switch once per billing cycle and keep completed modules on your transcript.",
        },
        Faq {
            question: "Is there a free trial?",
            answer: "Yes. Every plan starts with a 7-day trial so you can explore lessons and platform tools before committing.",
        },
    ],
};
