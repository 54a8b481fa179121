//! Built-in checks

use std::collections::BTreeSet;

use sysinfo::System;

use super::{CheckResult, SystemCheck};
use crate::app::AppConfig;
use crate::app::input::{
    CaptureChange, KeyEvent, MessageRouter, Modifiers, MouseButton, MouseEventKind, RawInput,
};
use crate::build_info;

/// Loads each configuration profile
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    pub fn new() -> Self {
        Self::with_profiles(vec!["debug", "release"])
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failed = 0;

        for profile in &self.profiles {
            match AppConfig::load(profile) {
                Ok(config) if config.input.queue_capacity == 0 => {
                    details.push(format!("⚠ '{profile}': queue_capacity 0 is raised to 1"));
                }
                Ok(config) => details.push(format!(
                    "✓ '{profile}': {}x{} window, {} events per queue, autorepeat {}",
                    config.window.width,
                    config.window.height,
                    config.input.queue_capacity,
                    config.input.autorepeat
                )),
                Err(e) => {
                    details.push(format!("✗ '{profile}': {e}"));
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            CheckResult::fail(format!("{failed} profile(s) failed to load")).with_details(details)
        } else if details.iter().any(|line| line.starts_with('⚠')) {
            CheckResult::warn("Profiles loaded with warnings").with_details(details)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details)
        }
    }
}

/// Reports the build metadata baked in by vergen
pub struct BuildInfoCheck;

impl SystemCheck for BuildInfoCheck {
    fn name(&self) -> &'static str {
        "Build Info"
    }

    fn check(&self) -> CheckResult {
        let details: Vec<String> = build_info::detailed_info()
            .lines()
            .map(str::to_string)
            .chain(std::iter::once(format!("Dirty: {}", build_info::is_git_dirty())))
            .collect();

        CheckResult::pass(build_info::version_string()).with_details(details)
    }
}

/// Gathers OS, CPU and memory information
pub struct SystemInfoCheck;

impl SystemCheck for SystemInfoCheck {
    fn name(&self) -> &'static str {
        "System Info"
    }

    fn check(&self) -> CheckResult {
        let mut sys = System::new_all();
        sys.refresh_all();

        let os_name = System::name().unwrap_or_else(|| "Unknown".to_string());
        let os_version = System::os_version().unwrap_or_else(|| "Unknown".to_string());
        let logical_cores = sys.cpus().len();
        let total_memory_gb = sys.total_memory() as f64 / 1_073_741_824.0;

        let details = vec![
            format!("OS: {os_name} {os_version}"),
            format!("CPU cores: {logical_cores} logical"),
            format!("Memory: {total_memory_gb:.1} GB total"),
        ];

        if logical_cores == 0 {
            CheckResult::warn("Unable to detect CPU cores").with_details(details)
        } else {
            CheckResult::pass(format!("{os_name} {os_version}")).with_details(details)
        }
    }
}

/// Enumerates wgpu adapters
pub struct GraphicsBackendCheck;

impl SystemCheck for GraphicsBackendCheck {
    fn name(&self) -> &'static str {
        "Graphics Backend"
    }

    fn check(&self) -> CheckResult {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let adapters: Vec<_> = instance
            .enumerate_adapters(wgpu::Backends::all())
            .into_iter()
            .collect();

        if adapters.is_empty() {
            return CheckResult::fail("No compatible graphics adapters available");
        }

        let mut backends = BTreeSet::new();
        let mut has_hardware = false;
        let details: Vec<String> = adapters
            .iter()
            .map(|adapter| {
                let info = adapter.get_info();
                backends.insert(format!("{:?}", info.backend));
                has_hardware |= matches!(
                    info.device_type,
                    wgpu::DeviceType::DiscreteGpu | wgpu::DeviceType::IntegratedGpu
                );
                format!("{} ({:?}, {:?})", info.name, info.device_type, info.backend)
            })
            .collect();

        let summary = format!(
            "{} adapter(s) via {}",
            adapters.len(),
            backends.into_iter().collect::<Vec<_>>().join(", ")
        );

        if has_hardware {
            CheckResult::pass(summary).with_details(details)
        } else {
            CheckResult::warn(format!("{summary}, no hardware GPU")).with_details(details)
        }
    }
}

/// Replays a scripted notification sequence through a fresh router
///
/// Verifies key gating, focus loss, queue bounds, wheel discretization and
/// capture transitions without a window.
pub struct InputBridgeCheck {
    width: u32,
    height: u32,
}

impl InputBridgeCheck {
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }

    fn scenarios(&self) -> Vec<(&'static str, bool)> {
        let none = Modifiers::empty();
        let mut scenarios = Vec::new();

        // Keys: repeats gated, focus loss keeps queued events
        let mut router = MessageRouter::new(self.width, self.height);
        router.dispatch(RawInput::KeyDown {
            code: 0x41,
            repeat: false,
            modifiers: none,
        });
        router.dispatch(RawInput::KeyDown {
            code: 0x41,
            repeat: true,
            modifiers: none,
        });
        scenarios.push(("repeat gated", router.keyboard().key_queue_len() == 1));
        router.dispatch(RawInput::FocusLost);
        scenarios.push((
            "focus loss",
            !router.keyboard().is_key_down(0x41) && router.keyboard().key_queue_len() == 1,
        ));
        scenarios.push((
            "fifo order",
            router.keyboard_mut().poll_key_event() == KeyEvent::Press(0x41)
                && !router.keyboard_mut().poll_key_event().is_valid(),
        ));

        // Queue bound
        for code in 0..40u32 {
            router.dispatch(RawInput::KeyUp {
                code,
                modifiers: none,
            });
        }
        let capacity = router.keyboard().capacity();
        scenarios.push((
            "drop oldest",
            router.keyboard().key_queue_len() == capacity
                && router.keyboard_mut().poll_key_event()
                    == KeyEvent::Release((40 - capacity) as u8),
        ));

        // Wheel carry
        let mut router = MessageRouter::new(self.width, self.height);
        for delta in [50, 50, 50] {
            router.dispatch(RawInput::Wheel {
                x: 0,
                y: 0,
                delta,
                modifiers: none,
            });
        }
        scenarios.push((
            "wheel carry",
            router.mouse().len() == 1 && router.mouse().wheel_carry() == 30,
        ));

        // Capture: one Enter in, one Leave out
        let mut router = MessageRouter::new(self.width, self.height);
        for (x, y) in [(10, 10), (20, 20), (-1, 20), (-2, 20), (30, 30)] {
            router.dispatch(RawInput::PointerMoved { x, y, modifiers: none });
        }
        let mut crossings = Vec::new();
        while !router.mouse().is_empty() {
            let kind = router.mouse_mut().poll_event().kind();
            if matches!(kind, MouseEventKind::Enter | MouseEventKind::Leave) {
                crossings.push(kind);
            }
        }
        scenarios.push((
            "capture crossings",
            crossings
                == [
                    MouseEventKind::Enter,
                    MouseEventKind::Leave,
                    MouseEventKind::Enter,
                ],
        ));

        // Drag released outside the window still leaves
        let mut router = MessageRouter::new(self.width, self.height);
        router.dispatch(RawInput::PointerMoved { x: 10, y: 10, modifiers: none });
        router.dispatch(RawInput::PointerMoved {
            x: -50,
            y: 10,
            modifiers: Modifiers::LEFT_BUTTON,
        });
        let released = router.dispatch(RawInput::Button {
            button: MouseButton::Left,
            pressed: false,
            x: -50,
            y: 10,
            modifiers: none,
        });
        scenarios.push((
            "drag release leaves",
            released == Some(CaptureChange::Release) && !router.mouse().is_in_window(),
        ));

        scenarios
    }
}

impl Default for InputBridgeCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for InputBridgeCheck {
    fn name(&self) -> &'static str {
        "Input Bridge"
    }

    fn check(&self) -> CheckResult {
        let scenarios = self.scenarios();
        let failed: Vec<_> = scenarios
            .iter()
            .filter(|(_, ok)| !ok)
            .map(|(name, _)| *name)
            .collect();
        let details: Vec<String> = scenarios
            .iter()
            .map(|(name, ok)| format!("{} {name}", if *ok { "✓" } else { "✗" }))
            .collect();

        if failed.is_empty() {
            CheckResult::pass(format!("{} scenarios passed", scenarios.len())).with_details(details)
        } else {
            CheckResult::fail(format!("Failed: {}", failed.join(", "))).with_details(details)
        }
    }
}
