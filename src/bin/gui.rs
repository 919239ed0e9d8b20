fn main() {
    fractal_flow::run_gui();
}
