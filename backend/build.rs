use std::fs;
use std::path::Path;

const PLACEHOLDER: &str = "<!doctype html>\n<html><body>\
<p>Interface não compilada. Execute <code>trunk build --release</code> em <code>frontend/</code>.</p>\
</body></html>\n";

fn main() {
    let out_dir = Path::new("static");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).unwrap();
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .unwrap();
    } else {
        // include_dir! needs the directory even for an API-only build.
        let index = out_dir.join("dist").join("index.html");
        if !index.exists() {
            fs::create_dir_all(out_dir.join("dist")).unwrap();
            fs::write(index, PLACEHOLDER).unwrap();
        }
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
