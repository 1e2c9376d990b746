//! System Metadata Collection
//!
//! Collects the machine description stored alongside every report:
//! OS, architecture, CPU model and core count, plus a UTC timestamp.
//! The CPU model is read from `/proc/cpuinfo` on Linux and reported as
//! "Unknown" elsewhere.

use chrono::Utc;
use searchbench_report::{ReportConfig, ReportMeta, SCHEMA_VERSION, SystemInfo};

/// Build report metadata for a run configured as `config`
pub fn build_report_meta(config: ReportConfig) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: get_cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: num_cpus(),
    };

    ReportMeta {
        schema_version: SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system,
        config,
    }
}

/// Get CPU model name from /proc/cpuinfo (Linux only)
fn get_cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("model name"))
                    .and_then(|l| l.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Get number of available CPU cores
fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_captures_config() {
        let meta = build_report_meta(ReportConfig {
            sizes: vec![10],
            cases: vec![],
            iterations: 5,
            warmup_iterations: 1,
            seed: Some(3),
            pinned_cpu: None,
        });

        assert_eq!(meta.schema_version, SCHEMA_VERSION);
        assert_eq!(meta.config.seed, Some(3));
        assert_eq!(meta.system.os, std::env::consts::OS);
        assert!(meta.system.cpu_cores >= 1);
        assert!(!meta.system.cpu.is_empty());
    }
}
