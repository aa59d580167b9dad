//! Night engine - cooperative scheduler, state machine, and command entry
//! points.
//!
//! The engine owns the authoritative [`Session`], a seedable RNG, and the
//! signal queue. The embedding layer drives it from one logical thread:
//! call [`NightEngine::advance`] with elapsed milliseconds every frame,
//! invoke commands on player input, and drain signals for rendering and
//! audio. Callbacks run to completion before the next is dispatched, so
//! no locking is needed anywhere.

use rand::rngs::StdRng;
use rand::SeedableRng;

use nightshift_logic::constants::{
    ai_tick_interval_ms, CAMERA_STATIC_MS, CLOCK_TICK_MS, FINAL_NIGHT, INTRO_DELAY_MS,
};
use nightshift_logic::settings::GameSettings;

use crate::events::{Signal, SignalQueue, SoundCue};
use crate::session::{AntagonistId, FailureCause, Session, Side, View};
use crate::systems::{antagonist_system, clock_system, power_system};

/// A scheduled one-shot clearing of the camera disturbance.
///
/// Carries the run id captured at scheduling time; if the session has been
/// replaced by the time it fires, the reversion is dropped rather than
/// touching the new run.
#[derive(Debug, Clone, Copy)]
struct StaticReversion {
    run_id: u64,
    remaining_ms: u64,
}

/// The night simulation engine.
pub struct NightEngine {
    session: Session,
    rng: StdRng,
    signals: SignalQueue,
    /// Orthogonal to `view`: gates both tick families without changing
    /// phase. Set while the settings menu is open.
    paused: bool,
    /// Monotonically increasing shift counter, bumped at every shift
    /// start. Guards stale one-shot effects.
    run_id: u64,
    /// Countdown from night-intro to active play.
    intro_remaining_ms: Option<u64>,
    /// Elapsed-time accumulators for the two tick families. Only fed
    /// while the active-play predicate holds, so a pause suspends both
    /// with no catch-up.
    clock_acc_ms: u64,
    ai_acc_ms: u64,
    ai_interval_ms: u64,
    pending_static: Option<StaticReversion>,
}

impl NightEngine {
    /// Engine seeded from entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Engine with a fixed seed; identical seeds and identical command
    /// traces produce identical sessions.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            session: Session::new(),
            rng,
            signals: SignalQueue::new(),
            paused: false,
            run_id: 0,
            intro_remaining_ms: None,
            clock_acc_ms: 0,
            ai_acc_ms: 0,
            ai_interval_ms: ai_tick_interval_ms(1),
            pending_static: None,
        }
    }

    /// The published session snapshot.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Direct session access for embedding layers (debug overlays,
    /// scenario setup). The engine re-validates nothing.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// JSON rendering of the snapshot for polling collaborators.
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.session)
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Take all signals queued since the last drain.
    pub fn drain_signals(&mut self) -> Vec<Signal> {
        self.signals.drain()
    }

    /// Both tick families run exactly when this holds. Checked fresh at
    /// every dispatch, never cached.
    fn is_active(&self) -> bool {
        self.session.view == View::Game && !self.paused
    }

    // ── Scheduling ──────────────────────────────────────────────────────

    /// Advance the engine by `delta_ms` of wall-clock time.
    ///
    /// Drives the intro countdown, the one-second clock/power tick, the
    /// AI tick, and any pending camera-static reversion. Ticks stop the
    /// moment the session leaves active play, including mid-advance.
    pub fn advance(&mut self, delta_ms: u64) {
        // One-shot reversion runs independently of the main timers and
        // of the pause flag.
        if let Some(reversion) = self.pending_static {
            if reversion.remaining_ms <= delta_ms {
                self.pending_static = None;
                if reversion.run_id == self.run_id && self.session.view == View::Game {
                    self.session.camera_static = false;
                }
            } else {
                self.pending_static = Some(StaticReversion {
                    remaining_ms: reversion.remaining_ms - delta_ms,
                    ..reversion
                });
            }
        }

        // Intro countdown: runs whenever the intro is showing. A delta
        // that overshoots the countdown spills into the first game frame.
        let mut delta_ms = delta_ms;
        if self.session.view == View::NightIntro {
            match self.intro_remaining_ms {
                Some(remaining) if remaining <= delta_ms => {
                    self.intro_remaining_ms = None;
                    delta_ms -= remaining;
                    self.begin_shift();
                }
                Some(remaining) => {
                    self.intro_remaining_ms = Some(remaining - delta_ms);
                    return;
                }
                None => return,
            }
        }

        if !self.is_active() {
            return;
        }

        self.ai_acc_ms += delta_ms;
        self.clock_acc_ms += delta_ms;

        while self.ai_acc_ms >= self.ai_interval_ms && self.is_active() {
            self.ai_acc_ms -= self.ai_interval_ms;
            self.ai_tick();
        }
        while self.clock_acc_ms >= CLOCK_TICK_MS && self.is_active() {
            self.clock_acc_ms -= CLOCK_TICK_MS;
            self.clock_tick();
        }
    }

    fn ai_tick(&mut self) {
        // Blackout stops movement; the outage chance takes over.
        if self.session.power <= 0.0 {
            return;
        }

        let report = antagonist_system(&mut self.session, &mut self.rng);

        if let Some(id) = report.attacker {
            self.fail_night(FailureCause::DoorAttack, id);
            return;
        }

        if report.door_blocked {
            self.signals.push(Signal::Sound(SoundCue::Door));
        }

        if report.moved && self.session.actuators.camera_open {
            self.session.camera_static = true;
            self.pending_static = Some(StaticReversion {
                run_id: self.run_id,
                remaining_ms: CAMERA_STATIC_MS,
            });
            self.signals.push(Signal::CameraDisturbance {
                duration_ms: CAMERA_STATIC_MS,
            });
            self.signals.push(Signal::Sound(SoundCue::Blip));
        }
    }

    fn clock_tick(&mut self) {
        let clock = clock_system(&mut self.session);
        if clock.shift_complete {
            self.complete_night();
            return;
        }

        let report = power_system(&mut self.session, &mut self.rng);
        if report.blackout_started {
            log::warn!("power exhausted on night {}", self.session.settings.night);
            self.signals.push(Signal::MonitorStatic(false));
            self.signals.push(Signal::Sound(SoundCue::Switch));
        }
        if report.outage_attack {
            self.fail_night(FailureCause::PowerOutage, AntagonistId::Blue);
        }
    }

    // ── State machine ───────────────────────────────────────────────────

    /// Begin a standard night from the title or continue screens.
    pub fn start_night(&mut self, night: u32) {
        if !matches!(self.session.view, View::Start | View::Win) {
            return;
        }
        self.enter_intro(GameSettings::for_night(night));
    }

    /// Open the custom-night setup screen.
    pub fn open_custom_setup(&mut self) {
        if self.session.view != View::Start {
            return;
        }
        self.set_view(View::CustomSetup);
    }

    /// Begin a custom night. Settings are assumed validated by the setup
    /// collaborator (`GameSettings::validate`).
    pub fn start_custom(&mut self, settings: GameSettings) {
        if self.session.view != View::CustomSetup {
            return;
        }
        self.enter_intro(settings);
    }

    /// Continue from a win to the next night.
    pub fn continue_next_night(&mut self) {
        if self.session.view != View::Win {
            return;
        }
        let next = self.session.settings.night + 1;
        self.enter_intro(GameSettings::for_night(next));
    }

    /// Return to the title screen from any phase. Stops all audio-
    /// equivalent signals and clears the pause flag.
    pub fn return_to_title(&mut self) {
        if self.session.view == View::Start {
            return;
        }
        self.paused = false;
        self.intro_remaining_ms = None;
        self.teardown_timers();
        self.signals.push(Signal::Ambience(false));
        self.signals.push(Signal::MonitorStatic(false));
        self.set_view(View::Start);
    }

    /// Pause or resume both tick families without changing phase.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    fn enter_intro(&mut self, settings: GameSettings) {
        log::info!(
            "night {} starting: blue AI {}, red AI {}",
            settings.night,
            settings.blue_ai,
            settings.red_ai
        );
        self.session.settings = settings;
        self.intro_remaining_ms = Some(INTRO_DELAY_MS);
        self.set_view(View::NightIntro);
    }

    fn begin_shift(&mut self) {
        self.run_id += 1;
        self.session.reset_for_shift();
        self.teardown_timers();
        self.ai_interval_ms = ai_tick_interval_ms(self.session.settings.night);
        self.pending_static = None;
        self.set_view(View::Game);
        self.signals.push(Signal::Ambience(true));
    }

    fn complete_night(&mut self) {
        let night = self.session.settings.night;
        log::info!("night {} survived", night);
        self.teardown_timers();
        self.signals.push(Signal::Ambience(false));
        self.signals.push(Signal::MonitorStatic(false));
        self.signals.push(Signal::NightCompleted { night });
        if night < FINAL_NIGHT {
            self.set_view(View::Win);
        } else {
            self.set_view(View::Ending);
        }
    }

    fn fail_night(&mut self, cause: FailureCause, antagonist: AntagonistId) {
        let night = self.session.settings.night;
        log::info!(
            "night {} lost: {:?} by {}",
            night,
            cause,
            antagonist.display_name()
        );
        self.session.jumpscare_source = Some(antagonist);
        self.session.jumpscare_cause = Some(cause);
        self.teardown_timers();
        self.signals.push(Signal::Ambience(false));
        self.signals.push(Signal::MonitorStatic(false));
        self.signals.push(Signal::Sound(SoundCue::Scare));
        self.signals.push(Signal::NightFailed {
            night,
            cause,
            antagonist,
        });
        self.set_view(View::Jumpscare);
    }

    /// Every exit path from active play resets the accumulators, so a
    /// later shift never inherits partial ticks.
    fn teardown_timers(&mut self) {
        self.clock_acc_ms = 0;
        self.ai_acc_ms = 0;
    }

    fn set_view(&mut self, view: View) {
        self.session.view = view;
        self.signals.push(Signal::PhaseChanged(view));
    }

    // ── Actuator commands ───────────────────────────────────────────────

    /// Commands are defined no-ops outside active play or with no power.
    fn actuators_available(&self) -> bool {
        self.session.view == View::Game && self.session.power > 0.0
    }

    /// Toggle a door. No-op when blacked out.
    pub fn toggle_door(&mut self, side: Side) {
        if !self.actuators_available() {
            return;
        }
        let actuators = &mut self.session.actuators;
        match side {
            Side::Left => actuators.left_door_closed = !actuators.left_door_closed,
            Side::Right => actuators.right_door_closed = !actuators.right_door_closed,
        }
        self.signals.push(Signal::Sound(SoundCue::Door));
    }

    /// Toggle a light. Turning one on forces the other off. The monitor
    /// blocks the light switches entirely (camera open and lights on are
    /// mutually exclusive).
    pub fn toggle_light(&mut self, side: Side) {
        if !self.actuators_available() {
            return;
        }
        if self.session.actuators.camera_open {
            return;
        }
        let actuators = &mut self.session.actuators;
        match side {
            Side::Left => {
                actuators.left_light_on = !actuators.left_light_on;
                if actuators.left_light_on {
                    actuators.right_light_on = false;
                }
            }
            Side::Right => {
                actuators.right_light_on = !actuators.right_light_on;
                if actuators.right_light_on {
                    actuators.left_light_on = false;
                }
            }
        }
        self.signals.push(Signal::Sound(SoundCue::Switch));
    }

    /// Toggle the camera monitor. Opening it forces both lights off.
    pub fn toggle_camera(&mut self) {
        if !self.actuators_available() {
            return;
        }
        let actuators = &mut self.session.actuators;
        actuators.camera_open = !actuators.camera_open;
        if actuators.camera_open {
            actuators.left_light_on = false;
            actuators.right_light_on = false;
        } else {
            self.session.camera_static = false;
        }
        self.signals.push(Signal::MonitorStatic(actuators.camera_open));
        self.signals.push(Signal::Sound(SoundCue::Switch));
    }
}

impl Default for NightEngine {
    fn default() -> Self {
        Self::new()
    }
}
