// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

use showdown_eval::{combos::for_each_ksubset, *};

fn eval(cards: &str) -> Hand {
    evaluate(&parse_cards(cards).unwrap()).unwrap()
}

#[test]
fn four_kings() {
    let hand = eval("Kh Kd Ks Kc 2h");
    assert_eq!(hand.category(), Category::FourOfAKind);
    assert_eq!(hand.description(), "four of a kind (kings)");
    assert_eq!(hand.rank() >> 20, Category::FourOfAKind.strength());

    let kings = hand.cards()[..4].iter().all(|c| c.rank() == Rank::King);
    assert!(kings);
    assert_eq!(hand.cards()[4], "2h".parse::<Card>().unwrap());
}

#[test]
fn royal_flush_is_the_strongest() {
    let royal = eval("Ah Kh Qh Jh Th");
    assert_eq!(royal.category(), Category::RoyalFlush);
    assert_eq!(royal.description(), "royal flush");

    // No random hand beats it.
    for seed in 0..2000 {
        let cards = Deck::new(seed).take(7).collect::<Vec<_>>();
        let hand = evaluate(&cards).unwrap();
        assert!(royal >= hand);
        assert!(royal.rank() <= hand.rank());
    }

    for suit in Suit::suits() {
        let cards = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten]
            .map(|r| Card::new(r, suit));
        assert_eq!(evaluate(&cards).unwrap(), royal);
    }
}

#[test]
fn omaha_uses_two_hole_cards() {
    let hole = parse_cards("Ah Kh 2c 2d").unwrap();
    let board = parse_cards("Ac Kc Qc Jc Tc").unwrap();
    let hand = evaluate_omaha(&hole, &board).unwrap();

    // Hand checked reference: A-K from the hole with Q-J-T from the board.
    assert_eq!(hand.category(), Category::Straight);
    assert_eq!(hand.rank(), 0x601234);
    assert_eq!(hand.cards(), &parse_cards("Ah Kh Qc Jc Tc").unwrap()[..]);
    assert_ne!(hand.category(), Category::StraightFlush);
}

#[test]
fn seeded_decks_replay() {
    let a = Deck::new(1234).collect::<Vec<_>>();
    let b = Deck::new(1234).collect::<Vec<_>>();
    assert_eq!(a, b);

    for seed in 0..10 {
        let c = Deck::new(seed).collect::<Vec<_>>();
        assert_ne!(a, c);
    }
}

#[test]
fn permutations_of_five() {
    let cards = parse_cards("Ah 2c 3d 4s 5h").unwrap();
    let expected = evaluate(&cards).unwrap();

    let mut perm = cards.clone();
    // Heap's algorithm over the 120 orders.
    let mut c = [0usize; 5];
    let mut i = 1;
    let mut count = 1;
    while i < 5 {
        if c[i] < i {
            if i % 2 == 0 {
                perm.swap(0, i);
            } else {
                perm.swap(c[i], i);
            }

            let hand = evaluate(&perm).unwrap();
            assert_eq!(hand.rank(), expected.rank());
            assert_eq!(hand.cards(), expected.cards());
            assert_eq!(hand.description(), expected.description());

            count += 1;
            c[i] += 1;
            i = 1;
        } else {
            c[i] = 0;
            i += 1;
        }
    }

    assert_eq!(count, 120);
}

// Evaluates all the 2.6M 5 cards hands, slow in debug builds.
#[test]
#[ignore]
fn all_five_cards_hands() {
    let deck = Card::all().collect::<Vec<_>>();
    let mut counts = [0usize; 11];
    let mut hand = Vec::with_capacity(HAND_SIZE);

    for_each_ksubset(deck.len(), HAND_SIZE, |p| {
        hand.clear();
        hand.extend(p.iter().map(|&idx| deck[idx]));
        counts[evaluate(&hand).unwrap().category().strength() as usize] += 1;
    });

    let expected = [
        (Category::RoyalFlush, 4),
        (Category::StraightFlush, 36),
        (Category::FourOfAKind, 624),
        (Category::FullHouse, 3_744),
        (Category::Flush, 5_108),
        (Category::Straight, 10_200),
        (Category::ThreeOfAKind, 54_912),
        (Category::TwoPair, 123_552),
        (Category::OnePair, 1_098_240),
        (Category::HighCard, 1_302_540),
    ];

    for (category, count) in expected {
        assert_eq!(counts[category.strength() as usize], count, "{category}");
    }

    assert_eq!(counts.iter().sum::<usize>(), combos::nck(52, 5));
}
