use crate::field::ParticleField;
use crate::surface::Surface;

// Drives a ParticleField one frame per host callback. The host re-arms its
// frame callback only while tick() returns true.
pub struct FrameLoop<S: Surface> {
    field: Option<ParticleField>,
    surface: S,
    frames: u64,
}

impl<S: Surface> FrameLoop<S> {
    pub fn new(field: ParticleField, surface: S) -> Self {
        FrameLoop {
            field: Some(field),
            surface,
            frames: 0,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.field.is_some()
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    // false once detached
    pub fn tick(&mut self) -> bool {
        match self.field.as_mut() {
            Some(field) => {
                field.frame(&mut self.surface);
                self.frames += 1;
                true
            }
            None => false,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if let Some(field) = self.field.as_mut() {
            field.resize(width, height);
        }
    }

    pub fn detach(&mut self) {
        if self.field.take().is_some() {
            log::debug!("particle field detached after {} frames", self.frames);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldConfig;
    use crate::surface::recording::RecordingSurface;

    fn attached_loop() -> FrameLoop<RecordingSurface> {
        let field = ParticleField::seeded(400.0, 300.0, FieldConfig::default(), 8);
        FrameLoop::new(field, RecordingSurface::default())
    }

    // Stand-in for requestAnimationFrame: keeps calling back while the loop
    // asks to be re-armed, up to a frame budget
    fn run_host(frame_loop: &mut FrameLoop<RecordingSurface>, budget: usize) -> usize {
        let mut scheduled = 0;
        while scheduled < budget && frame_loop.tick() {
            scheduled += 1;
        }
        scheduled
    }

    #[test]
    fn ticks_draw_while_attached() {
        let mut frame_loop = attached_loop();
        assert!(frame_loop.is_attached());
        assert_eq!(run_host(&mut frame_loop, 3), 3);
        assert_eq!(frame_loop.frame_count(), 3);
        assert_eq!(frame_loop.surface().circles(), 150);
    }

    #[test]
    fn detach_stops_scheduling_and_drawing() {
        let mut frame_loop = attached_loop();
        run_host(&mut frame_loop, 2);
        let drawn = frame_loop.surface().calls.len();

        frame_loop.detach();
        assert!(!frame_loop.is_attached());
        assert!(frame_loop.field().is_none());
        assert_eq!(run_host(&mut frame_loop, 10), 0);
        assert!(!frame_loop.tick());
        assert_eq!(frame_loop.surface().calls.len(), drawn);
        assert_eq!(frame_loop.frame_count(), 2);
    }

    #[test]
    fn detach_twice_is_harmless() {
        let mut frame_loop = attached_loop();
        frame_loop.detach();
        frame_loop.detach();
        assert!(!frame_loop.tick());
    }

    #[test]
    fn resize_reaches_the_field_without_touching_particles() {
        let mut frame_loop = attached_loop();
        frame_loop.tick();
        let before = frame_loop.field().unwrap().particles().to_vec();
        frame_loop.resize(1920.0, 1080.0);
        let field = frame_loop.field().unwrap();
        assert_eq!((field.width(), field.height()), (1920.0, 1080.0));
        assert_eq!(field.particles(), &before[..]);
    }

    #[test]
    fn resize_after_detach_is_ignored() {
        let mut frame_loop = attached_loop();
        frame_loop.detach();
        frame_loop.resize(10.0, 10.0);
        assert!(frame_loop.field().is_none());
    }
}
