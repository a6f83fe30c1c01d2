#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    pdf_qa_lib::run();
}
