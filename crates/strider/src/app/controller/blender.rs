use engine::CharacterRig;
use tracing::warn;

use super::ClipName;

const ALL_CLIPS: [ClipName; 4] = [ClipName::Idle, ClipName::Walk, ClipName::Run, ClipName::Back];

#[derive(Debug)]
struct BoundClip {
    name: ClipName,
    duration_seconds: f32,
    cursor_seconds: f32,
    weight: f32,
}

#[derive(Debug)]
struct Crossfade {
    start_weights: Vec<f32>,
    elapsed_seconds: f32,
}

/// Weighted playback over the rig's named clips. A transition resets the
/// incoming clip's cursor and fades the whole weight distribution toward it
/// over the crossfade window, so weights always sum to one and a retarget
/// mid-fade picks up from wherever the previous fade left the mix.
#[derive(Debug)]
pub(crate) struct AnimationBlender {
    clips: Vec<BoundClip>,
    current: ClipName,
    fade: Option<Crossfade>,
    crossfade_seconds: f32,
}

impl AnimationBlender {
    /// Binds the controller's clips by name. Clips the rig does not provide
    /// stay unbound and transitions to them are skipped.
    pub(crate) fn new(rig: &CharacterRig, crossfade_seconds: f32) -> Self {
        let mut clips = Vec::new();
        for name in ALL_CLIPS {
            match rig.clip(name.as_str()) {
                Some(clip) => clips.push(BoundClip {
                    name,
                    duration_seconds: clip.duration_seconds,
                    cursor_seconds: 0.0,
                    weight: 0.0,
                }),
                None => warn!(clip = name.as_str(), "rig_clip_unbound"),
            }
        }

        let mut blender = Self {
            clips,
            current: ClipName::Idle,
            fade: None,
            crossfade_seconds,
        };
        if let Some(index) = blender.index_of(ClipName::Idle) {
            blender.clips[index].weight = 1.0;
        }
        blender
    }

    /// Starts a crossfade to `target`. No-op when the target is already
    /// current or the rig never provided it.
    pub(crate) fn transition_to(&mut self, target: ClipName) {
        if target == self.current {
            return;
        }
        let Some(target_index) = self.index_of(target) else {
            return;
        };

        self.clips[target_index].cursor_seconds = 0.0;
        self.fade = Some(Crossfade {
            start_weights: self.clips.iter().map(|clip| clip.weight).collect(),
            elapsed_seconds: 0.0,
        });
        self.current = target;
    }

    /// Advances the fade and loops the cursor of every audible clip.
    pub(crate) fn advance(&mut self, dt_seconds: f32) {
        if let Some(fade) = self.fade.as_mut() {
            fade.elapsed_seconds += dt_seconds;
            let progress = (fade.elapsed_seconds / self.crossfade_seconds).min(1.0);
            for (index, clip) in self.clips.iter_mut().enumerate() {
                let target_weight = if clip.name == self.current { 1.0 } else { 0.0 };
                let start = fade.start_weights[index];
                clip.weight = start + (target_weight - start) * progress;
            }
            if progress >= 1.0 {
                self.fade = None;
            }
        }

        for clip in &mut self.clips {
            if clip.weight > 0.0 {
                clip.cursor_seconds = (clip.cursor_seconds + dt_seconds) % clip.duration_seconds;
            }
        }
    }

    pub(crate) fn current_clip(&self) -> ClipName {
        self.current
    }

    #[cfg(test)]
    fn is_crossfading(&self) -> bool {
        self.fade.is_some()
    }

    #[cfg(test)]
    fn clip_weight(&self, name: ClipName) -> f32 {
        self.index_of(name)
            .map(|index| self.clips[index].weight)
            .unwrap_or(0.0)
    }

    #[cfg(test)]
    fn clip_cursor(&self, name: ClipName) -> Option<f32> {
        self.index_of(name).map(|index| self.clips[index].cursor_seconds)
    }

    fn index_of(&self, name: ClipName) -> Option<usize> {
        self.clips.iter().position(|clip| clip.name == name)
    }

    #[cfg(test)]
    fn total_weight(&self) -> f32 {
        self.clips.iter().map(|clip| clip.weight).sum()
    }
}
