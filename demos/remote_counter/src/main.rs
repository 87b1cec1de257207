use std::cell::RefCell;
use std::rc::Rc;

use trellis_core::prelude::*;
use trellis_render::Renderer;

fn app() -> (AnyElement, Rc<RefCell<Option<SetState<i64>>>>) {
    // In a full deployment the setter is wired to a click event coming back
    // over the transport; here we keep a handle so main can drive it.
    let increment = Rc::new(RefCell::new(None));
    let root = component("counter_app", {
        let increment = increment.clone();
        move || {
            let (count, set_count) = use_state(|| 0i64);
            *increment.borrow_mut() = Some(set_count);
            vec![
                HostElement::new("label")
                    .prop("text", format!("Count = {count}"))
                    .into(),
                HostElement::new("button").prop("text", "Increment").into(),
            ]
        }
    });
    (root, increment)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let renderer = Renderer::new();
    let (root, increment) = app();

    let tree = renderer.render(root.as_ref());
    println!("{}", serde_json::to_string_pretty(&tree)?);

    let set_count = increment
        .borrow()
        .clone()
        .ok_or_else(|| anyhow::anyhow!("counter never rendered"))?;
    set_count.set(42);

    for id in renderer.queue().drain() {
        log::info!("{id} invalidated, re-rendering");
    }
    let tree = renderer.render(root.as_ref());
    println!("{}", serde_json::to_string_pretty(&tree)?);

    Ok(())
}
