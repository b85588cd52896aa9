use super::*;

fn buffer(bytes: &[u8]) -> ByteBuffer {
	ByteBuffer::from(bytes)
}

#[test]
fn byte_out_of_bounds() {
	let buf = buffer(&[1, 2, 3]);
	assert_eq!(buf.byte(2), Ok(3));
	assert_eq!(buf.byte(3), Err(DataError::OutOfBounds { position: 3, size: 3 }));
}

#[test]
fn insert_at_end_appends() {
	let mut buf = buffer(&[1, 2]);
	buf.insert(2, &[3, 4]).unwrap();
	assert_eq!(buf.as_slice(), &[1, 2, 3, 4]);
	assert!(buf.insert(5, &[0]).is_err());
}

#[test]
fn remove_and_replace() {
	let mut buf = buffer(&[1, 2, 3, 4, 5]);
	buf.remove(1, 2).unwrap();
	assert_eq!(buf.as_slice(), &[1, 4, 5]);

	buf.replace(1, &[9, 9]).unwrap();
	assert_eq!(buf.as_slice(), &[1, 9, 9]);
	assert!(buf.replace(2, &[0, 0]).is_err());
}

#[test]
fn fill_zeroes_range() {
	let mut buf = buffer(&[7, 7, 7, 7]);
	buf.fill(1, 2).unwrap();
	assert_eq!(buf.as_slice(), &[7, 0, 0, 7]);
}

#[test]
fn read_vec_copies_range() {
	let buf = buffer(&[1, 2, 3, 4]);
	assert_eq!(buf.read_vec(1, 2), Ok(vec![2, 3]));
	assert!(buf.read_vec(3, 2).is_err());
}

#[test]
fn read_only_buffer_has_no_editable_view() {
	let mut buf = ByteBuffer::read_only(vec![1, 2]);
	assert!(buf.as_editable().is_none());

	let mut editable = buffer(&[1]);
	assert!(editable.as_editable().is_some());
}

#[test]
fn borrowed_store_forwards_editing() {
	let mut buf = buffer(&[1, 2]);
	{
		let mut borrowed: &mut ByteBuffer = &mut buf;
		let store = ByteStore::as_editable(&mut borrowed).unwrap();
		store.set_byte(0, 9).unwrap();
	}
	assert_eq!(buf.as_slice(), &[9, 2]);
}

#[test]
fn check_range_detects_overflow() {
	assert!(check_range(u64::MAX, 2, 10).is_err());
	assert!(check_range(4, 6, 10).is_ok());
}
