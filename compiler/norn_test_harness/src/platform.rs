//! Target platform classification.

/// Execution environment a test module targets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetPlatform {
    /// Runs on the JVM.
    Jvm,
    /// Runs on a JS engine.
    Js,
    /// Platform-neutral common code, compiled against every platform.
    Common,
}

impl TargetPlatform {
    pub fn is_jvm(self) -> bool {
        matches!(self, TargetPlatform::Jvm)
    }

    pub fn is_js(self) -> bool {
        matches!(self, TargetPlatform::Js)
    }
}
