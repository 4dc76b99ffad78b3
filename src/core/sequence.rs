// Fixed-delay choreography for the reveal, modeled as an explicit state
// machine so it can be driven by browser timers or by a fake clock.
//
// Every `Step` delay is relative to the moment the cue that produced it
// fired, so the timeline is chained: gate fade, then reveal, then title,
// then hearts.

/// Text revealed letter by letter once the experience is visible.
pub const TITLE_TEXT: &str = "HAPPY BIRTHDAY MY LOVE";

/// Tuned delays for the reveal. These are constants, not derived from any
/// animation-complete events.
#[derive(Clone, Debug)]
pub struct Timings {
    /// Wait after hiding the gate before showing the experience.
    pub gate_fade_ms: u32,
    /// Wait after the reveal before building the title.
    pub title_delay_ms: u32,
    /// Wait after building the title before the first heart is drawn.
    pub hearts_delay_ms: u32,
    /// Offset between consecutive heart paths.
    pub heart_stagger_ms: u32,
    /// Duration of the star layer opacity ramp.
    pub star_fade_ms: f64,
    pub title_text: &'static str,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            gate_fade_ms: 480,
            title_delay_ms: 400,
            hearts_delay_ms: 1200,
            heart_stagger_ms: 400,
            star_fade_ms: 1600.0,
            title_text: TITLE_TEXT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceState {
    Gated,
    Revealing,
    FadingStars,
    TitleBuilding,
    HeartsDrawing,
    Settled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    HideGate,
    RevealExperience,
    BuildTitle,
    DrawHearts,
    HeartDrawn(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub delay_ms: u32,
    pub cue: Cue,
}

impl Step {
    #[inline]
    pub fn after(delay_ms: u32, cue: Cue) -> Self {
        Self { delay_ms, cue }
    }
}

/// Delay of each heart path relative to the start of heart drawing.
pub fn heart_reveal_delays(count: usize, stagger_ms: u32) -> impl Iterator<Item = u32> {
    (0..count).map(move |i| stagger_ms.saturating_mul(i as u32))
}

pub struct Sequencer {
    pub timings: Timings,
    state: ExperienceState,
    heart_count: usize,
    hearts_drawn: usize,
}

impl Sequencer {
    pub fn new(timings: Timings, heart_count: usize) -> Self {
        Self {
            timings,
            state: ExperienceState::Gated,
            heart_count,
            hearts_drawn: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> ExperienceState {
        self.state
    }

    /// Open-control activation. Only the first call from `Gated` starts the
    /// timeline; later activations return `None`.
    pub fn activate(&mut self) -> Option<Vec<Step>> {
        if self.state != ExperienceState::Gated {
            return None;
        }
        self.state = ExperienceState::Revealing;
        Some(vec![Step::after(0, Cue::HideGate)])
    }

    /// Record that `cue` fired and return the steps it schedules.
    pub fn on_cue(&mut self, cue: Cue) -> Vec<Step> {
        match cue {
            Cue::HideGate => {
                self.state = ExperienceState::Revealing;
                vec![Step::after(self.timings.gate_fade_ms, Cue::RevealExperience)]
            }
            Cue::RevealExperience => {
                self.state = ExperienceState::FadingStars;
                vec![Step::after(self.timings.title_delay_ms, Cue::BuildTitle)]
            }
            Cue::BuildTitle => {
                self.state = ExperienceState::TitleBuilding;
                vec![Step::after(self.timings.hearts_delay_ms, Cue::DrawHearts)]
            }
            Cue::DrawHearts => {
                if self.heart_count == 0 {
                    self.state = ExperienceState::Settled;
                    return Vec::new();
                }
                self.state = ExperienceState::HeartsDrawing;
                heart_reveal_delays(self.heart_count, self.timings.heart_stagger_ms)
                    .enumerate()
                    .map(|(i, delay)| Step::after(delay, Cue::HeartDrawn(i)))
                    .collect()
            }
            Cue::HeartDrawn(_) => {
                self.hearts_drawn += 1;
                if self.hearts_drawn >= self.heart_count {
                    self.state = ExperienceState::Settled;
                }
                Vec::new()
            }
        }
    }
}
