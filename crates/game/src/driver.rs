//! Headless session: replays a key script through the input layer and steps the
//! simulation on a fixed frame clock, mirroring it into an ECS scene.

use engine_core::{EntityKind, Time};
use glam::Vec3;
use input::{Action, ElementState, InputState, Keymap};
use std::time::Duration;

use crate::config::{GameConfig, ScriptedAction};
use crate::scene::{EcsScene, Presentation};
use crate::seeder;
use crate::simulation::Simulation;

/// Totals for a finished session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub frames: u64,
    pub elapsed_seconds: f32,
    pub shots: usize,
    pub hits: usize,
    pub expired: usize,
    pub targets_left: usize,
    pub projectiles_live: usize,
    pub vehicle_position: Vec3,
    /// Meshed visuals in the scene at the end.
    pub instances: usize,
}

/// Press or release keys so the held set matches the script at `frame`.
pub fn apply_script(input: &mut InputState, keymap: &Keymap, script: &[ScriptedAction], frame: u32) {
    for action in Action::ALL {
        let key = keymap.key_for(action);
        let wanted = script.iter().any(|s| s.action == action && s.is_held(frame));
        match (wanted, input.is_key_held(key)) {
            (true, false) => input.process_keyboard(key, ElementState::Pressed),
            (false, true) => input.process_keyboard(key, ElementState::Released),
            _ => {}
        }
    }
}

/// Run the configured session to completion.
pub fn run(config: &GameConfig) -> SessionSummary {
    let scenario = &config.scenario;
    let keymap = Keymap::default();

    let mut seeder = seeder::from_tuning(&config.tuning.world);
    let mut sim = Simulation::new(config.tuning.clone(), seeder.as_mut());
    let mut presentation = Presentation::new(EcsScene::new());
    presentation.sync(&sim);

    let mut input = InputState::new();
    let mut time = Time::with_max_delta(Duration::from_millis(scenario.max_delta_ms));
    let frame_time = Duration::from_secs_f32(scenario.dt.max(0.0));

    let (mut shots, mut hits, mut expired) = (0, 0, 0);

    for frame in 0..scenario.frames {
        input.begin_frame();
        apply_script(&mut input, &keymap, &scenario.script, frame);
        time.advance(frame_time);

        let report = sim.step(&input.control_input(&keymap), time.delta_seconds());
        shots += usize::from(report.fired.is_some());
        hits += report.hits.len();
        expired += report.expired.len();
        if report.fired.is_some() || !report.hits.is_empty() || !report.expired.is_empty() {
            log::debug!("{:?}", report);
        }

        presentation.sync(&sim);
    }

    let scene = presentation.sink();
    debug_assert_eq!(scene.count(EntityKind::Target), sim.targets().len());

    SessionSummary {
        frames: time.frame_count(),
        elapsed_seconds: time.elapsed_seconds(),
        shots,
        hits,
        expired,
        targets_left: sim.targets().len(),
        projectiles_live: sim.projectiles().len(),
        vehicle_position: sim.vehicle().position(),
        instances: scene.instances().len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Scenario;
    use input::KeyCode;

    #[test]
    fn script_presses_and_releases_keys() {
        let keymap = Keymap::default();
        let script = vec![ScriptedAction::new(Action::Forward, 1, 3)];
        let mut input = InputState::new();

        apply_script(&mut input, &keymap, &script, 0);
        assert!(!input.is_key_held(KeyCode::KeyW));

        input.begin_frame();
        apply_script(&mut input, &keymap, &script, 1);
        assert!(input.is_key_pressed(KeyCode::KeyW));

        input.begin_frame();
        apply_script(&mut input, &keymap, &script, 2);
        assert!(input.is_key_held(KeyCode::KeyW));
        assert!(!input.is_key_pressed(KeyCode::KeyW));

        input.begin_frame();
        apply_script(&mut input, &keymap, &script, 3);
        assert!(input.is_key_released(KeyCode::KeyW));
        assert!(!input.control_input(&keymap).forward);
    }

    #[test]
    fn held_fire_shoots_once() {
        let mut config = GameConfig::default();
        config.tuning.world.fixed_targets = Some(vec![]);
        config.scenario = Scenario {
            frames: 20,
            script: vec![ScriptedAction::new(Action::Fire, 2, 15)],
            ..Scenario::default()
        };
        let summary = run(&config);
        assert_eq!(summary.shots, 1);
        assert_eq!(summary.projectiles_live, 1);
    }

    #[test]
    fn scripted_strafe_run_clears_a_target() {
        let mut config = GameConfig::default();
        config.tuning.world.fixed_targets = Some(vec![Vec3::new(0.0, 5.0, -30.0)]);
        config.tuning.world.emplacements = vec![Vec3::new(10.0, 0.0, 10.0)];
        config.scenario = Scenario {
            frames: 120,
            script: vec![ScriptedAction::new(Action::Fire, 0, 1)],
            ..Scenario::default()
        };

        let summary = run(&config);
        assert_eq!(summary.frames, 120);
        assert_eq!(summary.shots, 1);
        assert_eq!(summary.hits, 1);
        assert_eq!(summary.targets_left, 0);
        assert_eq!(summary.projectiles_live, 0);
        // Vehicle and emplacement remain meshed.
        assert_eq!(summary.instances, 2);
        assert!((summary.elapsed_seconds - 2.0).abs() < 1e-3);
    }

    #[test]
    fn default_session_keeps_vehicle_above_ground() {
        let mut config = GameConfig::default();
        config.tuning.world.seed = Some(1);
        let summary = run(&config);
        assert_eq!(summary.frames, 600);
        assert_eq!(summary.shots, 4);
        assert!(summary.vehicle_position.y >= config.tuning.vehicle.ground_clearance);
        assert_eq!(summary.hits + summary.targets_left, 10);
    }
}
