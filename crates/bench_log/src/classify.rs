// Operation classes, decided from the naming convention of the benchmark
// executables.

/// Marker for the optimized binding that reuses scratch storage. Contains
/// `OPTIMIZED_MARKER`, so it must be checked first.
const SCRATCH_REUSE_MARKER: &str = "mkIISR";
const OPTIMIZED_MARKER: &str = "mkII";
const ORIGINAL_MARKER: &str = "orig";
const PARALLEL_MARKER: &str = "openmp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationClass {
    NativeReference,
    OriginalBinding,
    OptimizedBinding,
    OptimizedBindingWithScratchReuse,
}

impl OperationClass {
    /// Legend order used by the charts.
    pub const ALL: [OperationClass; 4] = [
        OperationClass::NativeReference,
        OperationClass::OriginalBinding,
        OperationClass::OptimizedBinding,
        OperationClass::OptimizedBindingWithScratchReuse,
    ];

    pub fn of(operation: &str) -> Self {
        if operation.contains(SCRATCH_REUSE_MARKER) {
            OperationClass::OptimizedBindingWithScratchReuse
        } else if operation.contains(OPTIMIZED_MARKER) {
            OperationClass::OptimizedBinding
        } else if operation.contains(ORIGINAL_MARKER) {
            OperationClass::OriginalBinding
        } else {
            OperationClass::NativeReference
        }
    }

    pub fn legend_label(self) -> &'static str {
        match self {
            OperationClass::NativeReference => "native C",
            OperationClass::OriginalBinding => "orig(gmpxx.h)",
            OperationClass::OptimizedBinding => "mkII(gmpxx_mkII.h)",
            OperationClass::OptimizedBindingWithScratchReuse => "mkIISR(gmpxx_mkII.h)",
        }
    }
}

/// True for the OpenMP variants.
pub fn is_parallel(operation: &str) -> bool {
    operation.contains(PARALLEL_MARKER)
}
