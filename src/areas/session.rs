use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Session {
    workspace: Workspace,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Session {
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Self {
        Session {
            workspace: Workspace::new(path.to_path_buf().into_boxed_path()),
            writer: RefCell::new(writer),
        }
    }

    pub fn path(&self) -> &Path {
        self.workspace.path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
