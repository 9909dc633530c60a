use stripmine::capability::HostVector;
use stripmine::config::{ElementGroup, GroupingFactor, SAXPY_GROUP};
use stripmine::kernels::Backend;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let host = HostVector::detect();
    let backend = Backend::detect();

    println!("Host vector unit");
    println!("  VLEN:        {} bits", host.vlen_bits());
    println!("  strip body:  {}", backend.name());
    println!("  kernel:      {SAXPY_GROUP}");
    println!("  VLMAX:");
    for lmul in GroupingFactor::ALL {
        let group = ElementGroup::e32(lmul);
        println!("    {group}: {}", group.vlmax(host.vlen_bits()));
    }

    Ok(())
}
