use min_heap::{MinHeap, Result};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let mut heap = MinHeap::with_capacity(5);
    for i in (1..=8).rev() {
        heap.insert(i);
        println!("{:?} (capacity {})", heap.as_slice(), heap.capacity());
    }

    println!("min: {}", heap.peek()?);
    while !heap.is_empty() {
        print!("{} ", heap.poll()?);
    }
    println!();

    if let Err(err) = heap.poll() {
        println!("ninth poll: {err}");
    }
    Ok(())
}
