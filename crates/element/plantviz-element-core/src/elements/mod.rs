//! Built-in industrial elements.
//!
//! Each module carries the element's identity, declared fields, timing rule
//! and vector geometry. Geometry coordinates are in the element's own view
//! box; the host scales them into the placement box.

use std::sync::Arc;

use crate::descriptor::ElementDescriptor;

pub mod control_panel;
pub mod conveyor;
pub mod drill;
pub mod mixer;
pub mod molding;
pub mod pick_place;
pub mod press;
pub mod printer;

pub use control_panel::ControlPanel;
pub use conveyor::ConveyorBelt;
pub use drill::DrillMachine;
pub use mixer::IndustrialMixer;
pub use molding::InjectionMolding;
pub use pick_place::PickAndPlace;
pub use press::HydraulicPress;
pub use printer::ThreeDPrinter;

/// Every built-in element, in catalog order.
pub fn builtin() -> Vec<Arc<dyn ElementDescriptor>> {
    vec![
        Arc::new(ThreeDPrinter),
        Arc::new(ConveyorBelt),
        Arc::new(DrillMachine),
        Arc::new(HydraulicPress),
        Arc::new(IndustrialMixer),
        Arc::new(InjectionMolding),
        Arc::new(PickAndPlace),
        Arc::new(ControlPanel),
    ]
}
