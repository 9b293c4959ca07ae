mod input;
mod menu;

fn main() -> anyhow::Result<()> {
    stockyard_observability::init();
    menu::run()
}
