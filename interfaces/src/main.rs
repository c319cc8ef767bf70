use interfaces::{File, ReadWrite, exercise};

fn main() {
    env_logger::init();

    let rw: Box<dyn ReadWrite> = Box::new(File);
    for line in exercise(rw.as_ref()) {
        println!("{}", line);
    }
}
