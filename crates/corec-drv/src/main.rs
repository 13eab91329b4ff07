fn main() {
    corec_drv::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(corec_drv::run(&args));
}
