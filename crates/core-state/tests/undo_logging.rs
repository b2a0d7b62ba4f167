use core_state::{EditorState, Operation};
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::Level;
use tracing::subscriber::with_default;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone)]
struct BufferWriter {
    inner: Arc<Mutex<Vec<u8>>>,
}

struct LockedWriter<'a> {
    guard: MutexGuard<'a, Vec<u8>>,
}

impl Write for LockedWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for BufferWriter {
    type Writer = LockedWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        LockedWriter {
            guard: self.inner.lock().expect("log buffer poisoned"),
        }
    }
}

#[test]
fn edit_and_history_events_use_state_targets() {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::TRACE)
        .with_target(true)
        .with_ansi(false)
        .without_time()
        .with_writer(BufferWriter { inner: buf.clone() })
        .finish();

    with_default(subscriber, || {
        let mut st = EditorState::new();
        st.apply(
            Operation::InsertChar {
                row: 0,
                col: 0,
                ch: 'a',
            },
            true,
        )
        .unwrap();
        st.undo().unwrap();
        st.redo().unwrap();
        st.search_all("a");
    });

    let out = String::from_utf8(buf.lock().unwrap().clone()).unwrap();
    assert!(out.contains("state.edit:"), "{out}");
    assert!(out.contains("op=\"insert_char\""), "{out}");
    assert!(out.contains("state.undo:"), "{out}");
    assert!(out.contains("undo_pop"));
    assert!(out.contains("redo_pop"));
    assert!(out.contains("state.search:"));
}
