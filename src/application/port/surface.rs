// SPDX-License-Identifier: MPL-2.0
//! Display surface port definition.

/// Port for the element that shows the preview image.
///
/// A surface has a settable source reference and a parent container whose
/// presentation classes can be toggled.
pub trait DisplaySurface {
    /// Binds `reference` as the image source.
    fn set_source(&mut self, reference: &str);

    /// Removes the image source, leaving the surface empty.
    fn clear_source(&mut self);

    /// Adds a presentation class to the surface's container.
    ///
    /// Adding a class that is already present has no effect.
    fn add_container_class(&mut self, class: &str);

    /// Removes a presentation class from the surface's container.
    ///
    /// Removing an absent class has no effect.
    fn remove_container_class(&mut self, class: &str);
}
