use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A screen of the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    /// Location text and care preference
    Location,
    /// Provider, date, and time slot
    Selection,
    /// Contact fields
    Details,
    /// Terminal summary
    Confirmed,
}

impl Step {
    pub fn title(&self) -> &'static str {
        match self {
            Step::Location => "Find your specialist",
            Step::Selection => "Select a date & time",
            Step::Details => "Your details",
            Step::Confirmed => "Confirmed",
        }
    }
}

/// Steps every plan ends with, in order.
const REQUIRED_TAIL: [Step; 3] = [Step::Selection, Step::Details, Step::Confirmed];

/// The ordered steps a journey walks through.
///
/// Only two shapes are valid: the full intake flow starting at
/// [`Step::Location`], and the provider-first flow that starts at
/// [`Step::Selection`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Step>", into = "Vec<Step>")]
pub struct StepPlan {
    steps: Vec<Step>,
}

impl StepPlan {
    /// Location, selection, details, confirmed.
    pub fn full() -> Self {
        Self {
            steps: vec![Step::Location, Step::Selection, Step::Details, Step::Confirmed],
        }
    }

    /// Provider-first: selection, details, confirmed.
    pub fn concierge() -> Self {
        Self {
            steps: REQUIRED_TAIL.to_vec(),
        }
    }

    pub fn new(steps: Vec<Step>) -> Result<Self, CoreError> {
        let tail = match steps.first() {
            Some(Step::Location) => &steps[1..],
            _ => &steps[..],
        };
        if tail != &REQUIRED_TAIL[..] {
            return Err(CoreError::Journey(format!(
                "invalid step plan {:?}: expected an optional location step followed by selection, details, confirmed",
                steps
            )));
        }
        Ok(Self { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn first(&self) -> Step {
        self.steps[0]
    }

    pub fn get(&self, index: usize) -> Option<Step> {
        self.steps.get(index).copied()
    }

    pub fn index_of(&self, step: Step) -> Option<usize> {
        self.steps.iter().position(|s| *s == step)
    }

    pub fn includes(&self, step: Step) -> bool {
        self.steps.contains(&step)
    }

    /// Number of steps the patient fills in (the confirmation screen excluded).
    pub fn input_steps(&self) -> usize {
        self.steps.len() - 1
    }

    /// "STEP 2 OF 3" style label; `None` for the confirmation screen.
    pub fn progress_label(&self, step: Step) -> Option<String> {
        if step == Step::Confirmed {
            return None;
        }
        self.index_of(step)
            .map(|i| format!("STEP {} OF {}", i + 1, self.input_steps()))
    }
}

impl Default for StepPlan {
    fn default() -> Self {
        Self::full()
    }
}

impl TryFrom<Vec<Step>> for StepPlan {
    type Error = CoreError;

    fn try_from(steps: Vec<Step>) -> Result<Self, Self::Error> {
        Self::new(steps)
    }
}

impl From<StepPlan> for Vec<Step> {
    fn from(plan: StepPlan) -> Self {
        plan.steps
    }
}
