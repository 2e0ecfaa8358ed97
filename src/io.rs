use serde::{Deserialize, Serialize};
use std::any::type_name;
use std::fs::File;
use std::io;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

pub fn dump_data_to_file<T: Serialize>(data: &T, file: &Path) -> io::Result<()> {
    let bytes = bincode::serialize(data)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
    let mut f = File::create(file)?;
    debug!("writing {} bytes to {:?}", bytes.len(), file);
    f.write_all(&bytes)
}

pub fn load_data_from_file<T: for<'a> Deserialize<'a>>(path: &Path) -> T {
    let mut f = File::open(path).expect(&*format!("could not open file at {:?}", path));
    let mut buf: Vec<u8> = vec![];
    f.read_to_end(&mut buf)
        .expect(&*format!("could not read file at {:?}", path));
    bincode::deserialize(&buf).expect(&*format!(
        "failed to deserialize data at {:?} into {}",
        path,
        type_name::<T>()
    ))
}
