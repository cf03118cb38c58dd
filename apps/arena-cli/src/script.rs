//! Scripted input sessions.
//!
//! A script is a YAML list of steps. Each step's edge events fire on its first
//! frame; the step then lasts `repeat` frames with whatever keys are held.
//! ```text
//! frames:
//!   - press: [w, left_shift]
//!     cursor: [800.0, 450.0]
//!     repeat: 30
//!   - release: [w]
//!     scroll: 5.0
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use arena_camera::FpsCamera;
use arena_input::{InputState, Key};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    pub frames: Vec<ScriptStep>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScriptStep {
    pub press: Vec<Key>,
    pub release: Vec<Key>,
    /// Absolute cursor position in window pixels.
    pub cursor: Option<[f32; 2]>,
    /// Relative mouse motion in window pixels (y down).
    pub look: Option<[f32; 2]>,
    pub scroll: Option<f32>,
    pub repeat: u32,
}

impl Default for ScriptStep {
    fn default() -> Self {
        Self {
            press: Vec::new(),
            release: Vec::new(),
            cursor: None,
            look: None,
            scroll: None,
            repeat: 1,
        }
    }
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let src = std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?;
        Self::parse(&src).with_context(|| format!("parsing script {}", path.display()))
    }

    pub fn parse(src: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(src)?)
    }

    /// Total frames covered by the script.
    pub fn frame_count(&self) -> u64 {
        self.frames.iter().map(|s| u64::from(s.repeat.max(1))).sum()
    }

    /// The step whose edge events fire on `frame`, if any.
    pub fn step_starting_at(&self, frame: u64) -> Option<&ScriptStep> {
        let mut start = 0;
        for step in &self.frames {
            if start == frame {
                return Some(step);
            }
            start += u64::from(step.repeat.max(1));
            if start > frame {
                return None;
            }
        }
        None
    }
}

/// Pose after one frame.
#[derive(Debug, Clone, Serialize)]
pub struct FramePose {
    pub frame: u64,
    pub time: f32,
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    pub airborne: bool,
    pub sprint: bool,
}

impl FramePose {
    pub fn capture(frame: u64, time: f32, camera: &FpsCamera) -> Self {
        Self {
            frame,
            time,
            position: camera.position().to_array(),
            yaw: camera.yaw(),
            pitch: camera.pitch(),
            zoom: camera.zoom_degrees(),
            airborne: camera.is_airborne(),
            sprint: camera.sprint_enabled(),
        }
    }
}

/// Drives a camera from a script, one host frame at a time.
pub struct Session {
    pub camera: FpsCamera,
    pub input: InputState,
    script: Script,
    frame: u64,
    time: f32,
}

impl Session {
    pub fn new(camera: FpsCamera, script: Script) -> Self {
        Self {
            camera,
            input: InputState::new(),
            script,
            frame: 0,
            time: 0.0,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.input.quit_requested()
    }

    /// One frame: edge events, held movement, physics update.
    pub fn step(&mut self, dt: f32) -> FramePose {
        if let Some(step) = self.script.step_starting_at(self.frame).cloned() {
            self.apply_edges(&step);
        }
        self.input.apply_held(&mut self.camera, dt);
        self.camera.update(dt);

        self.time += dt;
        let pose = FramePose::capture(self.frame, self.time, &self.camera);
        self.frame += 1;
        pose
    }

    fn apply_edges(&mut self, step: &ScriptStep) {
        for &key in &step.press {
            let action = self.input.handle_key(key, true);
            InputState::dispatch(&mut self.camera, action);
        }
        for &key in &step.release {
            let action = self.input.handle_key(key, false);
            InputState::dispatch(&mut self.camera, action);
        }
        if let Some([x, y]) = step.cursor {
            let action = self.input.handle_cursor(x, y);
            InputState::dispatch(&mut self.camera, action);
        }
        if let Some([dx, dy]) = step.look {
            let action = self.input.handle_cursor_delta(dx, dy);
            InputState::dispatch(&mut self.camera, Some(action));
        }
        if let Some(dy) = step.scroll {
            let action = self.input.handle_scroll(dy);
            InputState::dispatch(&mut self.camera, Some(action));
        }
    }
}
