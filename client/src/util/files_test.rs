use super::*;

fn file(name: &str, mime: &str, size: u64) -> SelectedFile {
    SelectedFile { name: name.to_owned(), mime_type: mime.to_owned(), size }
}

#[test]
fn accepts_image_at_size_limit() {
    assert_eq!(check_image(&file("a.png", "image/png", MAX_IMAGE_BYTES)), Ok(()));
}

#[test]
fn refuses_non_image_mime_type() {
    assert_eq!(
        check_image(&file("notes.pdf", "application/pdf", 10)),
        Err(FileRejection::NotAnImage { name: "notes.pdf".to_owned() })
    );
}

#[test]
fn refuses_oversized_image() {
    assert_eq!(
        check_image(&file("huge.jpg", "image/jpeg", MAX_IMAGE_BYTES + 1)),
        Err(FileRejection::TooLarge { name: "huge.jpg".to_owned() })
    );
}

#[test]
fn partition_keeps_selection_order() {
    let (accepted, rejected) = partition_images(vec![
        file("1.png", "image/png", 1),
        file("x.txt", "text/plain", 1),
        file("2.webp", "image/webp", 1),
    ]);
    let names: Vec<_> = accepted.iter().map(ImageFile::name).collect();
    assert_eq!(names, ["1.png", "2.webp"]);
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].to_string(), "x.txt is not an image");
}

#[test]
fn trait_name_matches_selected_file_name() {
    let f = file("beach.jpg", "image/jpeg", 1);
    assert_eq!(ImageFile::name(&f), "beach.jpg");
}
