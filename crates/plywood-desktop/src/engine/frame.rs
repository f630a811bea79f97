//! Per-output frame driver

use std::time::Instant;

use tracing::warn;

use crate::output::Renderer;
use crate::seat::Seat;

use super::Compositor;

impl<S: Seat> Compositor<S> {
    /// Tick animations and draw one frame on the named output
    ///
    /// When the render target cannot be acquired the frame is committed
    /// empty and false is returned; layout state is unaffected.
    pub fn handle_frame(&mut self, output: &str, renderer: &mut dyn Renderer, now: Instant) -> bool {
        let Some(output) = self.outputs.get(output).cloned() else {
            warn!(output, "frame for unknown output");
            return false;
        };

        let updates = self.scheduler.tick_at(now);
        self.stage.apply(updates);

        if self.stage.cross_axis() == 0 {
            let resolution = self.outputs.combined_resolution();
            if !resolution.is_empty() {
                self.stage.update_output_mode(resolution);
            }
        }

        if let Err(err) = renderer.begin(&output) {
            warn!(output = %output.name, %err, "skipping frame");
            renderer.commit_empty(&output);
            return false;
        }

        renderer.clear(self.settings.background);
        self.stage.render(&output, renderer);
        renderer.end();
        true
    }
}
