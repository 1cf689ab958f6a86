// Synlink landing page - Leptos 0.8 CSR edition

fn main() {
    synlink_landing::start();
}
