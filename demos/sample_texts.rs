use mwl_phonemizer::{Dialect, G2P};

const SAMPLES: [&str; 3] = [
    "Muitas lhénguas ténen proua de ls sous pergaminos antigos, de la lhiteratura screbida hai cientos d'anhos i de scritores hai muito afamados, hoije bandeiras dessas lhénguas. Mas outras hai que nun puoden tener proua de nada desso, cumo ye l causo de la lhéngua mirandesa.",
    "Todos ls seres houmanos nácen lhibres i eiguales an honra i an dreitos. Dotados de rezon i de cuncéncia, dében de se dar bien uns culs outros i cumo armano",
    "Quien dirie qu'antre ls matos eiriçados
Las ourriêtas i ls rius d'esta tiêrra,
Bibie, cumo l chaugarço de la siêrra,
Ua lhéngua de sons tan bariados?

Mostre-se i fale-s' essa lhéngua filha
D'un pobo que ten neilha l choro i l canto!
Nada por ciêrto mos cautiba tanto
Cumo la form' an que l'eideia brilha.

Zgraçiado d'aquel, qu'abandonando
La patri' an que naciu, la casa i l huôrto.
Tamien se squeçe de la fala! Quando
L furdes ber, talbéç que stéia muôrto!",
];

fn main() {
    for dialect in Dialect::ALL {
        let g2p = G2P::new(dialect);
        println!("=== {dialect} ===");
        for text in SAMPLES {
            println!("Original: {text}");
            println!("Phonemized: {}\n", g2p.phonemize(text));
        }
    }
}
