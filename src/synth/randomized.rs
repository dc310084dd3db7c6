//! Random phrase templates filled with the declaration's raw name.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::detect::{DeclarationKind, DeclarationSite};

use super::{CommentBlock, Synthesizer};

const TYPE_TEMPLATES: &[&str] = &[
    "Provides core functionality related to {}.",
    "Responsible for managing {} operations.",
    "Data model representing {}.",
    "Defines behaviors and state for {}.",
    "Main class handling {} logic.",
];

const CONSTRUCTOR_TEMPLATES: &[&str] = &[
    "Creates a new {} instance.",
    "Constructs a {} with the given values.",
    "Initializes a new {}.",
    "Builds a {} ready for use.",
    "Sets up the initial state of {}.",
];

const METHOD_TEMPLATES: &[&str] = &[
    "Executes the logic for {}.",
    "Handles processing of {}.",
    "Performs the operation defined by {}.",
    "Responsible for executing {} functionality.",
    "Initiates the process of {}.",
];

const FIELD_TEMPLATES: &[&str] = &[
    "Holds the value for {}.",
    "Stores data related to {}.",
    "Represents the state of {}.",
    "Keeps track of {}.",
    "Defines {} used in this class.",
];

pub(super) const RETURN_LINE: &str = "@return The result of the operation.";
pub(super) const THROWS_LINE: &str = "@throws Exception if an error occurs during execution.";

/// Picks a phrase uniformly at random per declaration.
///
/// The generator is shared behind a mutex so one instance can serve
/// parallel file workers.
pub struct Randomized {
    rng: Mutex<StdRng>,
}

impl Randomized {
    /// Create a synthesizer seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a reproducible synthesizer.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn pick(&self, templates: &[&'static str]) -> &'static str {
        let mut rng = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        templates.choose(&mut *rng).copied().unwrap_or(templates[0])
    }
}

impl Default for Randomized {
    fn default() -> Self {
        Self::new()
    }
}

impl Synthesizer for Randomized {
    fn name(&self) -> &'static str {
        "randomized"
    }

    fn synthesize(&self, site: &DeclarationSite) -> CommentBlock {
        let templates = match site.kind {
            DeclarationKind::Type => TYPE_TEMPLATES,
            DeclarationKind::Constructor => CONSTRUCTOR_TEMPLATES,
            DeclarationKind::Method => METHOD_TEMPLATES,
            DeclarationKind::Field => FIELD_TEMPLATES,
        };
        let summary = self.pick(templates).replace("{}", &site.name);
        let builder = CommentBlock::builder().line(summary);

        if !site.kind.is_callable() {
            return builder.build();
        }

        let mut builder = builder.blank();
        for param in &site.parameters {
            builder = builder.line(format!("@param {} The {} parameter.", param, param));
        }
        if site.kind == DeclarationKind::Method {
            if site.has_return_value {
                builder = builder.line(RETURN_LINE);
            }
            builder = builder.line(THROWS_LINE);
        }
        builder.build()
    }
}
