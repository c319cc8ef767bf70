pub trait Reader {
    fn read(&self) -> String;
}

pub trait Writer {
    fn write(&self) -> String;
}

/// Anything that can both read and write.
pub trait ReadWrite: Reader + Writer {}

impl<T: Reader + Writer> ReadWrite for T {}

#[derive(Debug, Default, Clone, Copy)]
pub struct File;

impl Reader for File {
    fn read(&self) -> String {
        "Reading the File".to_string()
    }
}

impl Writer for File {
    fn write(&self) -> String {
        "Writing the File".to_string()
    }
}

/// Read then write through a trait object.
pub fn exercise(rw: &dyn ReadWrite) -> Vec<String> {
    log::debug!("dispatching through dyn ReadWrite");
    vec![rw.read(), rw.write()]
}
