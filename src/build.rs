// build.rs
fn main() {
    println!("cargo:rerun-if-env-changed=PEARL_SHEET_CSV");
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/pearl.ico");    // multi-size .ico
        if let Err(e) = res.compile() {
            println!("cargo:warning=icon resource not embedded: {e}");
        }
    }
}
