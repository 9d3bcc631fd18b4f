use {
    super::Bitmap,
    crate::{
        basis::{Color, BACKGROUND, FOREGROUND},
        glyph::rasterize,
    },
    image::ImageFormat,
    std::io::Cursor,
};

fn checker(width: u32, height: u32) -> Bitmap {
    Bitmap::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            FOREGROUND
        } else {
            BACKGROUND
        }
    })
}

#[test]
fn from_fn_is_row_major() {
    let bitmap = Bitmap::from_fn(3, 2, |x, y| Color {
        r: x as u8,
        g: y as u8,
        b: 0,
    });
    assert_eq!(bitmap.data.len(), 2);
    assert!(bitmap.data.iter().all(|row| row.len() == 3));
    assert_eq!(bitmap.pixel(2, 1), Color { r: 2, g: 1, b: 0 });
    assert_eq!(
        bitmap.scanlines()[1],
        [0, 1, 0, 1, 1, 0, 2, 1, 0].to_vec()
    );
}

#[test]
fn ppm_header() {
    let ppm = checker(2, 1).to_ppm();
    assert_eq!(&ppm[..11], b"P6\n2 1\n255\n");
    assert_eq!(&ppm[11..], [255, 255, 255, 52, 52, 52]);
}

#[test]
fn ppm_reads_back() {
    let bitmap = rasterize(9);
    let mut buf = vec![];
    bitmap.write_ppm(&mut buf).unwrap();
    assert_eq!(Bitmap::read_ppm(Cursor::new(buf)).unwrap(), bitmap);
}

#[test]
fn ppm_with_comments() {
    let mut ppm = b"P6\n# 2 2\n# generated\n2  1\n255\n".to_vec();
    ppm.extend_from_slice(&[1, 2, 3, 4, 5, 6]);
    let bitmap = Bitmap::read_ppm(Cursor::new(ppm)).unwrap();
    assert_eq!(bitmap.width, 2);
    assert_eq!(bitmap.height, 1);
    assert_eq!(bitmap.pixel(1, 0), Color { r: 4, g: 5, b: 6 });
}

#[test]
fn ppm_errors() {
    assert!(Bitmap::read_ppm(Cursor::new(b"P3\n1 1\n255\n\0\0\0".to_vec())).is_err());
    assert!(Bitmap::read_ppm(Cursor::new(b"P6\nx 1\n255\n\0\0\0".to_vec())).is_err());
    assert!(Bitmap::read_ppm(Cursor::new(b"P6\n1 1\n".to_vec())).is_err());
    assert!(Bitmap::read_ppm(Cursor::new(b"P6\n1 1\n65535\n\0\0\0".to_vec())).is_err());
    assert!(Bitmap::read_ppm(Cursor::new(b"P6\n0 4294967295\n255\n".to_vec())).is_err());
    // truncated pixel data
    assert!(Bitmap::read_ppm(Cursor::new(b"P6\n2 1\n255\n\0\0\0".to_vec())).is_err());
}

#[test]
fn ppm_decodes_with_image() {
    let bitmap = checker(5, 4);
    let img = image::load_from_memory_with_format(&bitmap.to_ppm(), ImageFormat::Pnm)
        .unwrap()
        .to_rgb8();
    assert_eq!(img.dimensions(), (5, 4));
    for (x, y, pixel) in img.enumerate_pixels() {
        assert_eq!(pixel.0, bitmap.pixel(x, y).to_bytes());
    }
}

#[test]
fn ppm_huge_header() {
    let err = Bitmap::read_ppm(Cursor::new(
        b"P6\n4294967295 4294967295\n255\n\0\0\0".to_vec(),
    ))
    .unwrap_err();
    assert!(err.to_string().contains("too large"));
}
