use sequin::divisors::proper_divisors;
use sequin::multiples::multiples_of;
use sequin::rotate::rotate_right;
use sequin::select::merge;

fn main() -> Result<(), sequin::Error> {
    println!("multiples of 7: {:?}", multiples_of(7.0, 5)?);

    let mut data = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    rotate_right(&mut data, 3);
    println!("rotated right by 3: {:?}", data);

    let ints = merge(
        &[1, 2, 3, 4, 5],
        &[2, 4, 6, 8, 10],
        &[1, 1, 1, 2, 2, 1, 2, 2, 2, 1],
    )?;
    println!("merged ints: {:?}", ints);

    let chars = merge(
        &['A', 'A', 'A', 'A', 'A'],
        &['B', 'B', 'B', 'B', 'B'],
        &[1, 2, 1, 2, 1, 2, 1, 2, 1, 2],
    )?;
    println!("merged chars: {:?}", chars);

    println!("proper divisors of 80: {:?}", proper_divisors(80)?);
    println!("proper divisors of 79: {:?}", proper_divisors(79)?);

    Ok(())
}
