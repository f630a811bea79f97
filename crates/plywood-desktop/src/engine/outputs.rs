//! Display hot-plug

use tracing::info;

use crate::math::Area;
use crate::output::OutputInfo;
use crate::seat::Seat;

use super::Compositor;

impl<S: Seat> Compositor<S> {
    /// Place a new output right of the others
    pub fn handle_new_output(&mut self, output: OutputInfo) {
        info!(output = %output.name, "output added");
        self.outputs.insert(output);
        self.update_stage_mode();
    }

    /// Returns false for an unknown output
    pub fn handle_output_mode(&mut self, name: &str, resolution: Area) -> bool {
        if !self.outputs.update_mode(name, resolution) {
            return false;
        }
        self.update_stage_mode();
        true
    }

    pub fn handle_output_removed(&mut self, name: &str) -> Option<OutputInfo> {
        let removed = self.outputs.remove(name)?;
        info!(output = name, "output removed");
        self.update_stage_mode();
        Some(removed)
    }

    fn update_stage_mode(&mut self) -> bool {
        let resolution = self.outputs.combined_resolution();
        self.stage.update_output_mode(resolution)
    }
}
