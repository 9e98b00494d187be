//! Scan progress reporting
//!
//! The builder pushes per-directory counts into a [`ScanObserver`]. The
//! terminal [`Spinner`] consumes those counts from atomics on its own
//! thread and never touches the tree being built.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK: Duration = Duration::from_millis(80);
const CLEAR_LINE: &[u8] = b"\r\x1b[2K";

/// Whether a spinner frame is currently drawn on stderr. Held while writing
/// so frames and log lines never interleave.
static STATUS_SHOWN: Mutex<bool> = Mutex::new(false);

fn status_shown() -> MutexGuard<'static, bool> {
    STATUS_SHOWN.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Receives running counts while a tree is being built.
pub trait ScanObserver {
    /// Called once per directory read with its visible subdirectory and
    /// file counts.
    fn entries_found(&mut self, dirs: usize, files: usize);
}

impl ScanObserver for () {
    fn entries_found(&mut self, _dirs: usize, _files: usize) {}
}

/// Running totals of everything seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounts {
    pub directories: usize,
    pub files: usize,
    pub reads: usize,
}

impl ScanObserver for ScanCounts {
    fn entries_found(&mut self, dirs: usize, files: usize) {
        self.directories += dirs;
        self.files += files;
        self.reads += 1;
    }
}

/// Render the status text shown next to the spinner frame.
pub fn status_line(root_label: &str, directories: usize, files: usize) -> String {
    let d_noun = if directories == 1 { "directory" } else { "directories" };
    let f_noun = if files == 1 { "file" } else { "files" };
    format!(
        "Scanning {}... ({} {}, {} {})",
        root_label, directories, d_noun, files, f_noun
    )
}

#[derive(Debug, Default)]
struct Shared {
    directories: AtomicUsize,
    files: AtomicUsize,
    done: AtomicBool,
}

/// Observer half of a running spinner.
#[derive(Debug, Clone)]
pub struct SpinnerFeed(Arc<Shared>);

impl ScanObserver for SpinnerFeed {
    fn entries_found(&mut self, dirs: usize, files: usize) {
        self.0.directories.fetch_add(dirs, Ordering::Relaxed);
        self.0.files.fetch_add(files, Ordering::Relaxed);
    }
}

/// Animated status line on stderr.
pub struct Spinner {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    /// Start drawing on stderr.
    pub fn start(root_label: &str) -> Self {
        let shared = Arc::new(Shared::default());
        let thread_shared = Arc::clone(&shared);
        let label = root_label.to_string();

        let handle = thread::Builder::new()
            .name("ttree-spinner".to_string())
            .spawn(move || draw_loop(&thread_shared, &label))
            .map_err(|e| tracing::debug!("spinner disabled: {}", e))
            .ok();

        Self { shared, handle }
    }

    pub fn feed(&self) -> SpinnerFeed {
        SpinnerFeed(Arc::clone(&self.shared))
    }

    /// Stop drawing and erase the status line.
    pub fn finish(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.shared.done.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop();
    }
}

fn draw_loop(shared: &Shared, label: &str) {
    let mut frame = 0usize;

    while !shared.done.load(Ordering::Relaxed) {
        let line = format!(
            "{} {}",
            FRAMES[frame % FRAMES.len()],
            status_line(
                label,
                shared.directories.load(Ordering::Relaxed),
                shared.files.load(Ordering::Relaxed),
            )
        );
        {
            let mut shown = status_shown();
            // Output errors only affect the animation
            let _ = draw_frame(&mut io::stderr().lock(), &mut shown, &line);
        }
        frame += 1;
        thread::sleep(TICK);
    }

    let mut shown = status_shown();
    let _ = clear_frame(&mut io::stderr().lock(), &mut shown);
}

fn draw_frame<W: Write>(out: &mut W, shown: &mut bool, line: &str) -> io::Result<()> {
    out.write_all(CLEAR_LINE)?;
    out.write_all(line.as_bytes())?;
    out.flush()?;
    *shown = true;
    Ok(())
}

fn clear_frame<W: Write>(out: &mut W, shown: &mut bool) -> io::Result<()> {
    if *shown {
        out.write_all(CLEAR_LINE)?;
        out.flush()?;
        *shown = false;
    }
    Ok(())
}

/// Stderr writer for log output.
///
/// Erases a drawn spinner frame before each write, so the line is not
/// overwritten by the next frame. The spinner redraws below it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogWriter;

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut shown = status_shown();
        let mut stderr = io::stderr().lock();
        clear_frame(&mut stderr, &mut shown)?;
        stderr.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}
