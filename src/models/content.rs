// Deck copy. Edit wording here; layout lives in gui::slides.

pub const TAGLINE_LEAD: &str = "A disaster relief system";
pub const TAGLINE_EMPHASIS: &str = "where corruption is impossible by design.";
pub const JUDGE_MODE_LABEL: &str = "Judge Mode (Later)";

pub const PROBLEM_SUMMARY: [&str; 2] = [
    "Disaster relief systems do not fail at fundraising.",
    "They fail after money is collected.",
];

pub const PROBLEM_POINTS: [&str; 4] = [
    "No enforcement after donation",
    "Opaque fund movement",
    "Manual trust in administrators",
    "No verifiable outcomes for donors",
];

#[derive(Debug, Clone, Copy)]
pub struct Principle {
    pub title: &'static str,
    pub body: &'static str,
}

pub const APPROACH: [Principle; 4] = [
    Principle {
        title: "Enforcement First",
        body: "Rules are enforced by smart contracts, not policies or promises.",
    },
    Principle {
        title: "Role-Based System",
        body: "Every actor operates under a strictly limited on-chain role.",
    },
    Principle {
        title: "Funds Are Locked",
        body: "Donations cannot be withdrawn without meeting contract conditions.",
    },
    Principle {
        title: "Fully Auditable",
        body: "Every action is verifiable on-chain, by anyone.",
    },
];

pub const WIREFLOW_STEPS: [&str; 5] = [
    "Donor sends funds → Relief Pool",
    "Admin approves campaign (no fund access)",
    "Volunteer verifies victims",
    "Service provider delivers aid",
    "Treasury releases funds automatically",
];

pub const DIFFERENTIATORS: [&str; 5] = [
    "No backend authority",
    "No manual overrides",
    "No admin fund custody",
    "No trust assumptions",
    "Enforcement happens automatically",
];

pub const CLOSING_HEADLINE: &str = "Trust is replaced by code.";
pub const CLOSING_LINES: [&str; 2] = ["RSYS doesn’t promise transparency.", "It enforces it."];
