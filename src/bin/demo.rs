use roundrobin::error::RoundRobinResult;
use roundrobin::utils::util::pretty_format_ring_queue;
use roundrobin::{RingQueue, RoundRobinError};

fn main() -> RoundRobinResult<()> {
    env_logger::init();

    let mut queue = RingQueue::new(5)?;
    println!("fresh queue: {queue}");

    for n in 0..5 {
        queue.push(n)?;
    }
    println!("after filling: {queue}");

    match queue.push(99) {
        Err(RoundRobinError::Overflow) => println!("push(99) rejected, queue is full"),
        other => println!("unexpected result: {other:?}"),
    }

    println!("pop -> {:?}", queue.pop()?);
    println!("pop -> {:?}", queue.pop()?);
    println!("peek -> {:?}", queue.peek()?);
    queue.push(100)?;
    println!("after wrap-around push: {queue}");

    println!("{}", pretty_format_ring_queue(&queue));
    Ok(())
}
