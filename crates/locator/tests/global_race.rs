//! Concurrent initialization of the process-wide locator
//!
//! Kept in its own test binary so the global starts uninitialized.

#[cfg(test)]
mod tests {
    use gantry_locator::{constants, init_global, InstallationMode};
    use std::fs;
    use std::sync::{Arc, Barrier};
    use std::thread;

    #[test]
    fn racing_initializers_observe_one_completed_locator() {
        let root = tempfile::TempDir::new().unwrap();
        let lib = root.path().join("lib");
        fs::create_dir(&lib).unwrap();
        fs::write(root.path().join(constants::BUILD_MARKER), "all:\n").unwrap();
        fs::write(root.path().join(constants::CONTRIB_MARKER), "# Contributing\n").unwrap();

        let barrier = Arc::new(Barrier::new(8));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let lib = lib.clone();
                thread::spawn(move || {
                    barrier.wait();
                    init_global(lib).unwrap()
                })
            })
            .collect();

        let locators: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let first = locators[0];
        assert_eq!(first.mode(), InstallationMode::Source);
        assert_eq!(first.library_dir(), lib.as_path());
        for locator in &locators {
            assert!(std::ptr::eq(first, *locator));
        }
    }
}
