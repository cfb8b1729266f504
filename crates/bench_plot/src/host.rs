// CPU model of the machine we are running on.

use bench_log::{UNKNOWN_CPU_MODEL, raw_cpu_model_from_cpuinfo, sanitize_cpu_model};
use sysinfo::System;

const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Raw model name as reported by the platform.
///
/// Linux answers from `/proc/cpuinfo`; other platforms, or a missing
/// cpuinfo file, go through sysinfo.
pub fn raw_host_cpu_model() -> String {
    if cfg!(target_os = "linux") {
        match std::fs::read_to_string(CPUINFO_PATH) {
            Ok(cpuinfo) => return raw_cpu_model_from_cpuinfo(&cpuinfo),
            Err(err) => log::warn!("cannot read {CPUINFO_PATH}: {err}"),
        }
    }

    let mut sys = System::new();
    sys.refresh_cpu();

    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .filter(|brand| !brand.is_empty())
        .unwrap_or_else(|| UNKNOWN_CPU_MODEL.to_string())
}

/// Sanitized model name, spaces kept.
pub fn host_cpu_model() -> String {
    sanitize_cpu_model(&raw_host_cpu_model())
}
